use anyhow::Result;

use league_relay::cli::Command;
use league_relay::{handle_board, handle_completions, handle_serve, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port, scoreboard } => handle_serve(*port, scoreboard),
        Command::Board { scoreboard } => handle_board(scoreboard),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
