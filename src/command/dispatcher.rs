use anyhow::Result;
use log::{error, warn};

use crate::api::ScoreboardClient;
use crate::leaderboard::LeaderboardFormatter;
use crate::slack::{SlackMessage, render};

use super::request::{LeagueCommand, SlashCommandForm};

/// Maps a slash command to one scoreboard call and renders the reply
#[derive(Clone)]
pub struct Dispatcher {
    client: ScoreboardClient,
    formatter: LeaderboardFormatter,
}

impl Dispatcher {
    pub fn new(client: ScoreboardClient, formatter: LeaderboardFormatter) -> Self {
        Self { client, formatter }
    }

    /// Never fails: scoreboard errors become an ephemeral `failed:` reply
    pub async fn dispatch(&self, command: LeagueCommand, form: &SlashCommandForm) -> SlackMessage {
        let username = form.username();
        if command.needs_username() && username.is_none() {
            warn!("{:?} without a username in {:?}", command, form.text);
            return render::usage(command.usage());
        }

        let result = match (command, username) {
            (LeagueCommand::ListAll, _) => self.leaderboard().await,
            (LeagueCommand::AddPlayer, Some(name)) => self.add_player(name).await,
            (LeagueCommand::GetPlayer, Some(name)) => self.get_player(name).await,
            (LeagueCommand::RecordWin, Some(name)) => self.record_win(name).await,
            (LeagueCommand::RemovePlayer, Some(name)) => self.remove_player(name).await,
            (_, None) => Ok(render::usage(command.usage())),
        };

        result.unwrap_or_else(|e| {
            error!("{:?} failed: {:?}", command, e);
            render::failure(&e)
        })
    }

    async fn leaderboard(&self) -> Result<SlackMessage> {
        let players = self.client.list_players().await?;
        let entries = self.formatter.rank_and_decorate(&players);
        Ok(render::leaderboard(&entries))
    }

    async fn add_player(&self, name: &str) -> Result<SlackMessage> {
        self.client.create_player(name).await?;
        Ok(render::player_added(name))
    }

    async fn get_player(&self, name: &str) -> Result<SlackMessage> {
        let player = self.client.get_player(name).await?;
        Ok(render::player_card(&player))
    }

    async fn record_win(&self, name: &str) -> Result<SlackMessage> {
        self.client.record_win(name).await?;
        Ok(render::win_recorded(name))
    }

    async fn remove_player(&self, name: &str) -> Result<SlackMessage> {
        self.client.remove_player(name).await?;
        Ok(render::player_removed(name))
    }
}
