use anyhow::Result;
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::api::{create_router, AppState, ScoreboardClient};
use crate::command::Dispatcher;
use crate::config::AppConfig;
use crate::leaderboard::LeaderboardFormatter;

pub struct ServerService {
    port: u16,
    config: AppConfig,
}

impl ServerService {
    pub fn new(port: u16, config: AppConfig) -> Self {
        Self { port, config }
    }

    pub async fn run(&self) -> Result<()> {
        let state = Arc::new(build_state(&self.config)?);

        let app = create_router(state).layer(
            ServiceBuilder::new().layer(
                TraceLayer::new_for_http()
                    .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                    .on_response(DefaultOnResponse::new().level(Level::INFO)),
            ),
        );

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!("Relaying to {}", self.config.scoreboard.base_url());
        info!("Server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

pub fn build_state(config: &AppConfig) -> Result<AppState> {
    let client = ScoreboardClient::new(&config.scoreboard)?;
    let dispatcher = Dispatcher::new(client, LeaderboardFormatter::default());
    Ok(AppState { dispatcher })
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutting down");
    }
}
