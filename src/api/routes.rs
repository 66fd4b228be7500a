use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use crate::api::handlers::{
    hello::hello,
    players::{add_player, get_player, leaderboard, record_win, remove_player, slash_command},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/hello/:name", get(hello))
        .route("/new/player", post(add_player))
        .route("/player", post(get_player))
        .route("/player/win", post(record_win))
        .route("/player/remove", post(remove_player))
        .route("/leaderboard", post(leaderboard))
        .route("/slack/command", post(slash_command))
        .with_state(state)
}
