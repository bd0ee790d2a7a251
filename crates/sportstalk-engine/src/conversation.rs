//! Conversation state for a single chat session.
//!
//! A turn has two halves so an event loop can keep rendering while the
//! answer service is working:
//!
//! 1. [`Conversation::begin_turn`] records the user message and returns the
//!    question payload to send.
//! 2. [`Conversation::complete_turn`] records the answer (or the fallback
//!    text) once the request resolves.
//!
//! [`Conversation::submit`] runs both halves against an [`AnswerService`].

use tracing::{debug, info, warn};

use crate::message::{Message, Sender, FALLBACK_ANSWER};
use crate::service::{AnswerService, AskError};

/// Whether a request is outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConversationState {
    /// Ready to accept a submission.
    #[default]
    Idle,
    /// A question has been dispatched and no outcome applied yet.
    AwaitingResponse,
}

/// An accepted submission waiting to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    /// Payload for the answer service.
    pub question: String,
}

/// Ordered, append-only transcript plus request state.
#[derive(Debug)]
pub struct Conversation {
    messages: Vec<Message>,
    state: ConversationState,
    next_id: u64,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl Conversation {
    /// Create an empty conversation.
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            state: ConversationState::Idle,
            next_id: 1,
        }
    }

    /// All messages in creation order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether no messages have been recorded.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Current request state.
    pub fn state(&self) -> ConversationState {
        self.state
    }

    /// Whether a request is outstanding.
    pub fn is_pending(&self) -> bool {
        self.state == ConversationState::AwaitingResponse
    }

    /// Accept a user submission.
    ///
    /// Returns `Ok(None)` for blank input, leaving everything untouched.
    /// Otherwise appends the trimmed text as a user message and returns the
    /// payload: every earlier message's content joined by newlines, then a
    /// newline and the new text. With no history the payload starts with
    /// the newline.
    pub fn begin_turn(&mut self, text: &str) -> Result<Option<Turn>, ConversationError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        if self.is_pending() {
            warn!("submission rejected while awaiting a response");
            return Err(ConversationError::Busy);
        }

        let history = self
            .messages
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        let question = format!("{history}\n{text}");

        self.push(Sender::User, text);
        self.state = ConversationState::AwaitingResponse;
        debug!(
            history_len = self.messages.len() - 1,
            question_len = question.len(),
            "turn started"
        );

        Ok(Some(Turn { question }))
    }

    /// Apply the outcome of the outstanding request.
    ///
    /// Failures of any kind are recorded as [`FALLBACK_ANSWER`].
    pub fn complete_turn(
        &mut self,
        outcome: Result<String, AskError>,
    ) -> Result<&Message, ConversationError> {
        if !self.is_pending() {
            return Err(ConversationError::NoPendingTurn);
        }

        let content = match outcome {
            Ok(answer) => {
                info!(answer_len = answer.len(), "answer received");
                answer
            }
            Err(e) => {
                warn!(error = %e, "answer request failed");
                FALLBACK_ANSWER.to_string()
            }
        };

        self.state = ConversationState::Idle;
        Ok(self.push(Sender::Assistant, content))
    }

    /// Run a full turn: record the input, ask `service`, record the answer.
    ///
    /// Returns the assistant message, or `None` if the input was blank.
    pub async fn submit(
        &mut self,
        text: &str,
        service: &dyn AnswerService,
    ) -> Result<Option<&Message>, ConversationError> {
        let Some(turn) = self.begin_turn(text)? else {
            return Ok(None);
        };
        let outcome = service.ask(&turn.question).await;
        self.complete_turn(outcome).map(Some)
    }

    fn push(&mut self, sender: Sender, content: impl Into<String>) -> &Message {
        let message = Message::new(self.next_id, sender, content);
        self.next_id += 1;
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }
}

/// Errors from conversation state transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConversationError {
    /// A request is already outstanding.
    #[error("a question is already awaiting an answer")]
    Busy,

    /// An outcome arrived with no request outstanding.
    #[error("no question is awaiting an answer")]
    NoPendingTurn,
}
