//! Append-only message transcript.
//!
//! ```rust
//! use lchat::{Message, Transcript};
//!
//! let transcript = Transcript::seeded(Message::bot("welcome"));
//! assert_eq!(transcript.len(), 1);
//! ```

use crate::Message;

/// Ordered message sequence owned by a session. Messages are appended in
/// insertion order and never reordered or removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    /// A transcript always starts with its greeting message, so it is
    /// never empty after initialization.
    pub fn seeded(greeting: Message) -> Self {
        Self {
            messages: vec![greeting],
        }
    }

    pub(crate) fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::Transcript;
    use crate::{Message, Sender};

    #[test]
    fn seeded_transcript_holds_the_greeting() {
        let transcript = Transcript::seeded(Message::bot("welcome"));
        assert_eq!(transcript.len(), 1);
        assert!(!transcript.is_empty());
        assert_eq!(transcript.messages()[0].sender, Sender::Bot);
    }

    #[test]
    fn push_preserves_insertion_order() {
        let mut transcript = Transcript::seeded(Message::bot("welcome"));
        transcript.push(Message::user("first"));
        transcript.push(Message::bot("second"));

        let texts: Vec<&str> = transcript
            .messages()
            .iter()
            .map(|message| message.text.as_str())
            .collect();
        assert_eq!(texts, vec!["welcome", "first", "second"]);
        assert_eq!(transcript.last().map(|m| m.text.as_str()), Some("second"));
    }
}
