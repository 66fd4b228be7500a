pub mod handlers;
pub mod models;
pub mod routes;
pub mod scoreboard_client;

pub use handlers::AppState;
pub use routes::create_router;
pub use scoreboard_client::ScoreboardClient;
