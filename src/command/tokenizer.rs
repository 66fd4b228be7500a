//! Username extraction from slash-command text.
//!
//! Grammar, scanned left to right:
//!
//! ```text
//! token    := upper word* (joiner word+)*
//! upper    := 'A'..'Z'
//! word     := 'A'..'Z' | 'a'..'z' | '0'..'9' | '_'
//! joiner   := '.' | '-'
//! boundary := start-of-text | any char that is neither word nor joiner
//! ```
//!
//! The username is the first `token` that starts at a `boundary`, taken
//! maximally. A joiner only belongs to the token when a word char follows it,
//! so trailing punctuation (`Alice.`) is never part of the name. Slack
//! escapes mentions as `<@U024BE7LH|bob>`, which yields the user id
//! `U024BE7LH`.

fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_joiner(c: char) -> bool {
    matches!(c, '.' | '-')
}

/// First capitalized word of `text`, if any
pub fn extract_username(text: &str) -> Option<&str> {
    let mut previous: Option<char> = None;

    for (start, c) in text.char_indices() {
        let at_boundary = previous.is_none_or(|p| !is_word(p) && !is_joiner(p));
        if at_boundary && c.is_ascii_uppercase() {
            return Some(take_token(text, start));
        }
        previous = Some(c);
    }

    None
}

fn take_token(text: &str, start: usize) -> &str {
    let mut end = start;
    let mut chars = text[start..].char_indices().peekable();

    while let Some((offset, c)) = chars.next() {
        let joins_next = is_joiner(c) && chars.peek().is_some_and(|(_, next)| is_word(*next));
        if !is_word(c) && !joins_next {
            break;
        }
        end = start + offset + c.len_utf8();
    }

    &text[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escaped_mention_yields_user_id() {
        assert_eq!(extract_username("<@U024BE7LH|bob>"), Some("U024BE7LH"));
    }

    #[test]
    fn test_at_prefixed_name() {
        assert_eq!(extract_username("@Alice wins again"), Some("Alice"));
        assert_eq!(extract_username("  Bob.Smith-2 "), Some("Bob.Smith-2"));
    }

    #[test]
    fn test_trailing_punctuation_is_not_part_of_name() {
        assert_eq!(extract_username("win Alice."), Some("Alice"));
        assert_eq!(extract_username("Alice- vs Bob"), Some("Alice"));
        assert_eq!(extract_username("Carol.-Dan"), Some("Carol"));
    }

    #[test]
    fn test_joiners_inside_name_are_kept() {
        assert_eq!(extract_username("Bob.Smith-2"), Some("Bob.Smith-2"));
        assert_eq!(extract_username("Bob.Smith-2, again"), Some("Bob.Smith-2"));
    }

    #[test]
    fn test_capital_inside_word_is_not_a_token() {
        assert_eq!(extract_username("mcBob"), None);
        assert_eq!(extract_username("mcBob Carol"), Some("Carol"));
    }

    #[test]
    fn test_no_token() {
        assert_eq!(extract_username(""), None);
        assert_eq!(extract_username("@alice 42"), None);
    }

    #[test]
    fn test_non_ascii_text_is_skipped() {
        assert_eq!(extract_username("żółw Zed"), Some("Zed"));
        assert_eq!(extract_username("🎱Eve"), Some("Eve"));
    }
}
