use chrono::Utc;

use crate::domain::{ColorTag, DisplayEntry, PlayerRecord};
use crate::leaderboard::color_for;

use super::message::{Attachment, SlackMessage};

const LEADERBOARD_HEADER: &str = "🎱 *League leaderboard*";
const EMPTY_LEADERBOARD: &str =
    "🎱 No players in the league yet. Add one with /addplayer @player";

/// Slack mention markup for a user id
pub fn mention(name: &str) -> String {
    format!("<@{}>", name)
}

/// Public leaderboard: header plus one two-field block per entry
pub fn leaderboard(entries: &[DisplayEntry]) -> SlackMessage {
    if entries.is_empty() {
        return SlackMessage::in_channel(EMPTY_LEADERBOARD);
    }

    let ts = Utc::now().timestamp();
    entries.iter().fold(
        SlackMessage::in_channel(LEADERBOARD_HEADER),
        |message, entry| message.with_attachment(entry_block(entry).with_timestamp(ts)),
    )
}

fn entry_block(entry: &DisplayEntry) -> Attachment {
    Attachment::colored(entry.color_tag.as_str())
        .with_field("", format!("{} {}", entry.decoration, mention(&entry.name)))
        .with_field("", entry.score.to_string())
}

/// Color of a lone player, judged as if they led the board
fn single_player_color(score: i64) -> ColorTag {
    color_for(0, score)
}

pub fn player_added(name: &str) -> SlackMessage {
    let block = Attachment::colored(ColorTag::Good.as_str()).with_text("Starting score: 0");
    SlackMessage::in_channel(format!("{} joined the league", mention(name))).with_attachment(block)
}

pub fn player_card(record: &PlayerRecord) -> SlackMessage {
    let color = single_player_color(record.score);
    SlackMessage::ephemeral(mention(&record.name)).with_attachment(
        Attachment::colored(color.as_str()).with_field("Score", record.score.to_string()),
    )
}

pub fn win_recorded(name: &str) -> SlackMessage {
    SlackMessage::in_channel(format!("🏆 Win recorded for {}", mention(name)))
        .with_attachment(Attachment::colored(ColorTag::Good.as_str()).with_text("+1 point"))
}

pub fn player_removed(name: &str) -> SlackMessage {
    SlackMessage::in_channel(format!("{} left the league", mention(name))).with_attachment(
        Attachment::colored(ColorTag::Danger.as_str()).with_text("Removed from the leaderboard"),
    )
}

pub fn usage(hint: &str) -> SlackMessage {
    SlackMessage::ephemeral(hint)
}

/// Upstream failure, shown only to the invoking user
pub fn failure(error: &anyhow::Error) -> SlackMessage {
    SlackMessage::ephemeral("Something went wrong talking to the scoreboard").with_attachment(
        Attachment::colored(ColorTag::Danger.as_str()).with_text(format!("failed: {:#}", error)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leaderboard::LeaderboardFormatter;
    use crate::slack::ResponseType;

    #[test]
    fn test_leaderboard_renders_one_block_per_entry() {
        let records = vec![PlayerRecord::new("U1", 2), PlayerRecord::new("U2", 0)];
        let entries = LeaderboardFormatter::default().rank_and_decorate(&records);

        let message = leaderboard(&entries);

        assert_eq!(message.response_type, Some(ResponseType::InChannel));
        assert_eq!(message.text, LEADERBOARD_HEADER);
        assert_eq!(message.attachments.len(), 2);
        assert_eq!(message.attachments[0].fields[0].value, "🥇 <@U1>");
        assert_eq!(message.attachments[0].fields[1].value, "2");
        assert_eq!(message.attachments[1].color.as_deref(), Some("danger"));
    }

    #[test]
    fn test_empty_leaderboard_is_not_an_error() {
        let message = leaderboard(&[]);

        assert!(message.attachments.is_empty());
        assert_eq!(message.response_type, Some(ResponseType::InChannel));
    }

    #[test]
    fn test_failure_is_ephemeral_and_danger() {
        let message = failure(&anyhow::anyhow!("connection refused"));

        assert_eq!(message.response_type, Some(ResponseType::Ephemeral));
        let attachment = &message.attachments[0];
        assert_eq!(attachment.color.as_deref(), Some("danger"));
        assert_eq!(attachment.text.as_deref(), Some("failed: connection refused"));
    }

    #[test]
    fn test_serialized_envelope_skips_empty_parts() {
        let json = serde_json::to_value(usage("Usage: /win @player")).unwrap();

        assert_eq!(json["response_type"], "ephemeral");
        assert!(json.get("attachments").is_none());
    }

    #[test]
    fn test_single_player_replies_have_one_colored_block() {
        let replies = [
            player_added("U7"),
            player_card(&PlayerRecord::new("U7", 4)),
            win_recorded("U7"),
            player_removed("U7"),
        ];

        for reply in &replies {
            assert_eq!(reply.attachments.len(), 1, "{:?}", reply.text);
            assert!(reply.attachments[0].color.is_some());
        }
        assert_eq!(replies[3].text, "<@U7> left the league");
        assert_eq!(replies[3].attachments[0].color.as_deref(), Some("danger"));
    }

    #[test]
    fn test_player_card_color_matches_leaderboard_policy() {
        let color_of = |score| {
            let card = player_card(&PlayerRecord::new("U7", score));
            card.attachments[0].color.clone()
        };

        assert_eq!(color_of(3).as_deref(), Some("good"));
        assert_eq!(color_of(0).as_deref(), Some("danger"));
        assert_eq!(color_of(-2).as_deref(), Some(color_for(0, -2).as_str()));
    }
}
