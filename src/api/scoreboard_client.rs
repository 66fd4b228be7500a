use anyhow::{Context, Result};
use log::info;
use serde_json::json;
use urlencoding::encode;

use crate::config::ScoreboardSettings;
use crate::domain::PlayerRecord;
use crate::http::HttpClient;

/// Client for the remote CRUD microservice holding player records
#[derive(Clone)]
pub struct ScoreboardClient {
    client: HttpClient,
    base_url: String,
}

impl ScoreboardClient {
    pub fn new(settings: &ScoreboardSettings) -> Result<Self> {
        let client = HttpClient::new(settings.user_agent, settings.timeout_secs)?;
        Ok(Self {
            client,
            base_url: settings.base_url(),
        })
    }

    /// Create a player with a zero score
    pub async fn create_player(&self, name: &str) -> Result<()> {
        info!("Creating player {}", name);
        let url = self.build_url("create");
        self.client
            .post_json(&url, &PlayerRecord::new(name, 0))
            .await?;
        Ok(())
    }

    /// Fetch a single player record
    pub async fn get_player(&self, name: &str) -> Result<PlayerRecord> {
        info!("Reading player {}", name);
        let url = self.build_player_url("read", name);
        let response = self.client.get(&url).await?;
        response
            .json()
            .await
            .with_context(|| format!("Failed to parse player record for {}", name))
    }

    /// Add one point to a player's score
    pub async fn record_win(&self, name: &str) -> Result<()> {
        info!("Recording win for {}", name);
        let url = self.build_player_url("update", name);
        self.client
            .put_json(&url, &json!({ "$inc": { "score": 1 } }))
            .await?;
        Ok(())
    }

    /// Fetch every player in the league
    pub async fn list_players(&self) -> Result<Vec<PlayerRecord>> {
        let url = self.build_url("all");
        let response = self.client.get(&url).await?;
        let players: Vec<PlayerRecord> = response
            .json()
            .await
            .context("Failed to parse player list")?;

        info!("Fetched {} players", players.len());
        Ok(players)
    }

    pub async fn remove_player(&self, name: &str) -> Result<()> {
        info!("Removing player {}", name);
        let url = self.build_player_url("delete", name);
        self.client.delete(&url).await?;
        Ok(())
    }

    // --- Helper Methods ---

    fn build_url(&self, action: &str) -> String {
        format!("{}/{}", self.base_url, action)
    }

    fn build_player_url(&self, action: &str, name: &str) -> String {
        format!("{}/{}/{}", self.base_url, action, encode(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ScoreboardClient {
        ScoreboardClient::new(&ScoreboardSettings {
            api_base_url: "https://api.example.com".to_string(),
            client_id: "c1".to_string(),
            microservice: "league".to_string(),
            user_agent: "test",
            timeout_secs: 1,
        })
        .unwrap()
    }

    #[test]
    fn test_player_urls_are_percent_encoded() {
        assert_eq!(
            client().build_player_url("read", "Ann Lee"),
            "https://api.example.com/c1/league/read/Ann%20Lee"
        );
        assert_eq!(client().build_url("all"), "https://api.example.com/c1/league/all");
    }
}
