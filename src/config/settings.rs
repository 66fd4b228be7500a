use anyhow::{Context, Result};

use crate::cli::ScoreboardArgs;

#[derive(Debug, Clone)]
pub struct ScoreboardSettings {
    pub api_base_url: String,
    pub client_id: String,
    pub microservice: String,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
}

impl ScoreboardSettings {
    /// Root URL of the CRUD microservice, without a trailing slash
    pub fn base_url(&self) -> String {
        format!(
            "{}/{}/{}",
            self.api_base_url.trim_end_matches('/'),
            self.client_id,
            self.microservice
        )
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub scoreboard: ScoreboardSettings,
}

impl AppConfig {
    pub fn new(scoreboard: ScoreboardSettings) -> Self {
        Self { scoreboard }
    }

    pub fn from_args(args: &ScoreboardArgs) -> Result<Self> {
        let client_id = required(&args.client_id).context("KINTOHUB_CLIENTID is not set")?;
        let microservice =
            required(&args.microservice).context("KINTOHUB_MICROSERVICE is not set")?;

        Ok(Self::new(ScoreboardSettings {
            api_base_url: args.api_url.clone(),
            client_id,
            microservice,
            user_agent: "LeagueRelay/1.0",
            timeout_secs: args.timeout_secs,
        }))
    }
}

fn required(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(client_id: Option<&str>, microservice: Option<&str>) -> ScoreboardArgs {
        ScoreboardArgs {
            api_url: "https://public.api.staging.kintohub.com/".to_string(),
            client_id: client_id.map(str::to_string),
            microservice: microservice.map(str::to_string),
            timeout_secs: 10,
        }
    }

    #[test]
    fn test_base_url_joins_client_and_service() {
        let config = AppConfig::from_args(&args(Some("c1"), Some("league"))).unwrap();

        assert_eq!(
            config.scoreboard.base_url(),
            "https://public.api.staging.kintohub.com/c1/league"
        );
    }

    #[test]
    fn test_missing_client_id_is_an_error() {
        let err = AppConfig::from_args(&args(Some("  "), Some("league")))
            .err()
            .unwrap();

        assert!(err.to_string().contains("KINTOHUB_CLIENTID"));
    }
}
