use anyhow::Result;
use colored::{ColoredString, Colorize};

use crate::api::ScoreboardClient;
use crate::config::AppConfig;
use crate::domain::{ColorTag, DisplayEntry};
use crate::leaderboard::LeaderboardFormatter;

/// Prints the league standings to stdout
pub struct BoardService {
    client: ScoreboardClient,
    formatter: LeaderboardFormatter,
}

impl BoardService {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            client: ScoreboardClient::new(&config.scoreboard)?,
            formatter: LeaderboardFormatter::default(),
        })
    }

    pub async fn run(&self) -> Result<()> {
        let players = self.client.list_players().await?;
        let entries = self.formatter.rank_and_decorate(&players);

        if entries.is_empty() {
            println!("No players in the league yet");
            return Ok(());
        }

        for entry in &entries {
            println!("{}", format_line(entry));
        }
        Ok(())
    }
}

fn format_line(entry: &DisplayEntry) -> ColoredString {
    let line = format!(
        "{:>3}. {} {:<24} {:>5}",
        entry.rank_index + 1,
        entry.decoration,
        entry.name,
        entry.score
    );
    match entry.color_tag {
        ColorTag::Good => line.green(),
        ColorTag::Danger => line.red(),
        ColorTag::Default => line.normal(),
    }
}
