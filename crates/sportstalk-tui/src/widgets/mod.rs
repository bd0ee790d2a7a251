//! UI widgets for the TUI.
//!
//! This module provides:
//! - [`InputBar`] - Bottom text entry bar
//! - [`FooterHints`] - Bottom keybinding hints
//! - [`TextInputState`] - Input buffer with cursor and history

mod footer_hints;
mod input_bar;
mod text_input;

pub use footer_hints::{FooterHints, KeyHint};
pub use input_bar::{InputBar, MAX_VISIBLE_LINES};
pub use text_input::TextInputState;
