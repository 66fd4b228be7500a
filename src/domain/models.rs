use serde::{Deserialize, Serialize};

/// One league participant as stored by the scoreboard CRUD service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    #[serde(default)]
    pub score: i64,
}

impl PlayerRecord {
    pub fn new(name: impl Into<String>, score: i64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// Slack attachment color keyword derived from rank and score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Good,
    Danger,
    Default,
}

impl ColorTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorTag::Good => "good",
            ColorTag::Danger => "danger",
            ColorTag::Default => "default",
        }
    }
}

/// A ranked, decorated view of one player for a single response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayEntry {
    pub rank_index: usize,
    pub decoration: String,
    pub color_tag: ColorTag,
    pub name: String,
    pub score: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_record_ignores_unknown_fields() {
        let json = r#"[{"_id": "5c1f", "name": "U024BE7LH", "score": 3}, {"name": "Alice"}]"#;

        let records: Vec<PlayerRecord> = serde_json::from_str(json).unwrap();

        assert_eq!(records[0], PlayerRecord::new("U024BE7LH", 3));
        assert_eq!(records[1], PlayerRecord::new("Alice", 0)); // score defaults to zero
    }

    #[test]
    fn test_color_tag_serializes_as_slack_keyword() {
        assert_eq!(serde_json::to_string(&ColorTag::Danger).unwrap(), "\"danger\"");
        assert_eq!(ColorTag::Good.as_str(), "good");
    }
}
