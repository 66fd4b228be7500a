use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "Slack relay for the league scoreboard")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the slash-command server
    Serve {
        /// Port number
        #[arg(short, long, env = "PORT", default_value_t = 8000)]
        port: u16,
        #[command(flatten)]
        scoreboard: ScoreboardArgs,
    },
    /// Print the current leaderboard to the terminal
    Board {
        #[command(flatten)]
        scoreboard: ScoreboardArgs,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

/// Where the scoreboard CRUD service lives
#[derive(Args, Debug, Clone, PartialEq)]
pub struct ScoreboardArgs {
    /// KintoHub API root
    #[arg(long, env = "KINTOHUB_API", default_value = "https://public.api.staging.kintohub.com")]
    pub api_url: String,
    /// KintoHub client id
    #[arg(long, env = "KINTOHUB_CLIENTID")]
    pub client_id: Option<String>,
    /// Name of the CRUD microservice
    #[arg(long, env = "KINTOHUB_MICROSERVICE")]
    pub microservice: Option<String>,
    /// Timeout for scoreboard calls, in seconds
    #[arg(long, env = "CRUD_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,
}
