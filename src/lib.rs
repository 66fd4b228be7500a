pub mod api;
pub mod cli;
pub mod command;
pub mod config;
pub mod domain;
pub mod http;
pub mod leaderboard;
pub mod services;
pub mod slack;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;

use crate::cli::{Command, ScoreboardArgs};
use crate::config::AppConfig;
use crate::services::{BoardService, ServerService};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16, args: &ScoreboardArgs) -> Result<()> {
    let config = AppConfig::from_args(args)?;
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_board(args: &ScoreboardArgs) -> Result<()> {
    let config = AppConfig::from_args(args)?;
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = BoardService::new(&config)?;
        service.run().await
    })
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
