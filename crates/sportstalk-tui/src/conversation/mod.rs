//! Conversation pane module.
//!
//! - [`message_lines`] / [`MessageView`] - renders one message
//! - [`ConversationPane`] - scrolling transcript with the typing row
//! - [`TranscriptScroll`] - scroll position, following new messages by default

mod message;
mod scroll;
mod widget;

pub use message::{message_lines, sender_label, MessageView};
pub use scroll::{TranscriptScroll, SCROLL_SPEED};
pub use widget::ConversationPane;
