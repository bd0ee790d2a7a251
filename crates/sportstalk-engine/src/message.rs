//! Message types for a conversation session.

use serde::{Deserialize, Serialize};

/// Text appended in place of an answer when the answer service fails.
pub const FALLBACK_ANSWER: &str = "Sorry, there was an error processing your request.";

/// Transient row shown while a request is outstanding. Never stored.
pub const TYPING_PLACEHOLDER: &str = "Typing...";

/// Placeholder shown in an empty input buffer.
pub const INPUT_PLACEHOLDER: &str = "Ask your sports question...";

/// Author of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The person typing questions.
    User,
    /// The answer service.
    Assistant,
}

impl Sender {
    /// Lowercase tag, as used on the wire and in transcripts.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single entry in the transcript.
///
/// Messages are created by [`crate::Conversation`] and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Position in the session, unique and strictly increasing.
    pub id: u64,
    /// Who wrote the message.
    pub sender: Sender,
    /// Message text, shown verbatim.
    pub content: String,
}

impl Message {
    pub(crate) fn new(id: u64, sender: Sender, content: impl Into<String>) -> Self {
        Self {
            id,
            sender,
            content: content.into(),
        }
    }

    /// Whether this is the fixed failure text rather than a real answer.
    pub fn is_fallback(&self) -> bool {
        self.sender == Sender::Assistant && self.content == FALLBACK_ANSWER
    }
}
