use serde::Deserialize;

use super::tokenizer::extract_username;

/// Form-encoded payload Slack posts for a slash command
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlashCommandForm {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub command: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub channel_id: String,
    #[serde(default)]
    pub response_url: String,
}

impl SlashCommandForm {
    pub fn username(&self) -> Option<&str> {
        extract_username(&self.text)
    }
}

/// League operations reachable from Slack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeagueCommand {
    AddPlayer,
    GetPlayer,
    RecordWin,
    ListAll,
    RemovePlayer,
}

impl LeagueCommand {
    /// Map a Slack command name (with or without the leading slash)
    pub fn from_slash(command: &str) -> Option<Self> {
        match command.trim().trim_start_matches('/') {
            "addplayer" | "newplayer" => Some(Self::AddPlayer),
            "player" | "getplayer" => Some(Self::GetPlayer),
            "win" | "recordwin" => Some(Self::RecordWin),
            "leaderboard" | "all" => Some(Self::ListAll),
            "removeplayer" => Some(Self::RemovePlayer),
            _ => None,
        }
    }

    pub fn needs_username(&self) -> bool {
        !matches!(self, Self::ListAll)
    }

    pub fn usage(&self) -> &'static str {
        match self {
            Self::AddPlayer => "Usage: /addplayer @player",
            Self::GetPlayer => "Usage: /player @player",
            Self::RecordWin => "Usage: /win @player",
            Self::ListAll => "Usage: /leaderboard",
            Self::RemovePlayer => "Usage: /removeplayer @player",
        }
    }
}
