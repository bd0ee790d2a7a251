//! sportstalk-engine: Headless conversation engine for the sportstalk client
//!
//! This crate provides the logic behind the chat client, including:
//! - The message model and fixed display strings
//! - Conversation state (transcript, pending request, payload construction)
//! - The answer service transport
//! - Configuration

pub mod config;
pub mod conversation;
pub mod message;
pub mod service;

// Re-export commonly used types
pub use config::{Config, ConfigError, ThemeName};
pub use conversation::{Conversation, ConversationError, ConversationState, Turn};
pub use message::{Message, Sender, FALLBACK_ANSWER, INPUT_PLACEHOLDER, TYPING_PLACEHOLDER};
pub use service::{AnswerService, AskError, HttpAnswerService};

/// Returns the engine version.
pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
