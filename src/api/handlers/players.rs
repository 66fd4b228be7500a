use axum::{
    extract::{Form, State},
    response::Json,
};
use log::{info, warn};
use std::sync::Arc;

use crate::command::{LeagueCommand, SlashCommandForm};
use crate::slack::{SlackMessage, render};
use super::AppState;

pub async fn add_player(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SlashCommandForm>,
) -> Json<SlackMessage> {
    run(&state, LeagueCommand::AddPlayer, form).await
}

pub async fn get_player(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SlashCommandForm>,
) -> Json<SlackMessage> {
    run(&state, LeagueCommand::GetPlayer, form).await
}

pub async fn record_win(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SlashCommandForm>,
) -> Json<SlackMessage> {
    run(&state, LeagueCommand::RecordWin, form).await
}

pub async fn leaderboard(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SlashCommandForm>,
) -> Json<SlackMessage> {
    run(&state, LeagueCommand::ListAll, form).await
}

pub async fn remove_player(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SlashCommandForm>,
) -> Json<SlackMessage> {
    run(&state, LeagueCommand::RemovePlayer, form).await
}

/// Single entry point routed by the form's `command` field
pub async fn slash_command(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SlashCommandForm>,
) -> Json<SlackMessage> {
    match LeagueCommand::from_slash(&form.command) {
        Some(command) => run(&state, command, form).await,
        None => {
            warn!("Unknown slash command {:?}", form.command);
            Json(render::usage(&format!(
                "Unknown command {}. Try /addplayer, /player, /win, /leaderboard or /removeplayer",
                form.command
            )))
        }
    }
}

async fn run(
    state: &AppState,
    command: LeagueCommand,
    form: SlashCommandForm,
) -> Json<SlackMessage> {
    info!(
        "{:?} from {} in {}: {:?}",
        command, form.user_name, form.channel_id, form.text
    );
    Json(state.dispatcher.dispatch(command, &form).await)
}
