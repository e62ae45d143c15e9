//! Message and session status value types.

use chrono::{DateTime, Utc};
use lcommon::MessageId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// A single transcript entry. Messages are never edited after creation;
/// the transcript only ever appends new ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: MessageId::generate(),
            text: text.into(),
            sender,
            timestamp: Utc::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text)
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(Sender::Bot, text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionStatus {
    pub busy: bool,
    pub last_error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::{Message, Sender};

    #[test]
    fn constructors_assign_sender_and_fresh_ids() {
        let user = Message::user("hello");
        let bot = Message::bot("hi there");

        assert_eq!(user.sender, Sender::User);
        assert_eq!(bot.sender, Sender::Bot);
        assert_ne!(user.id, bot.id);
        assert!(user.timestamp <= bot.timestamp);
    }
}
