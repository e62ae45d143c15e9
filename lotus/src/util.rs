//! Small convenience constructors for common types.

use crate::{Difficulty, Message};

pub fn user_message(text: impl Into<String>) -> Message {
    Message::user(text)
}

pub fn bot_message(text: impl Into<String>) -> Message {
    Message::bot(text)
}

pub fn parse_difficulty(value: &str) -> Option<Difficulty> {
    match value.trim().to_ascii_lowercase().as_str() {
        "all" | "any" => Some(Difficulty::All),
        "beginner" | "easy" => Some(Difficulty::Beginner),
        "intermediate" | "medium" => Some(Difficulty::Intermediate),
        "advanced" | "hard" => Some(Difficulty::Advanced),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crate::{Difficulty, Sender};

    use super::{bot_message, parse_difficulty, user_message};

    #[test]
    fn parse_difficulty_supports_aliases() {
        assert_eq!(parse_difficulty("beginner"), Some(Difficulty::Beginner));
        assert_eq!(parse_difficulty("Easy"), Some(Difficulty::Beginner));
        assert_eq!(parse_difficulty(" advanced "), Some(Difficulty::Advanced));
        assert_eq!(parse_difficulty("any"), Some(Difficulty::All));
        assert_eq!(parse_difficulty("unknown"), None);
    }

    #[test]
    fn message_helpers_apply_expected_senders() {
        assert_eq!(user_message("hello").sender, Sender::User);
        assert_eq!(bot_message("namaste").sender, Sender::Bot);
    }
}
