//! Test utilities for sportstalk-tui snapshot and integration testing.
//!
//! This module provides helper functions for creating test apps, rendering
//! screens, and converting buffers to strings for snapshot testing.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::app::App;
use crate::screens::Screen as ScreenTrait;
use crate::theme::Theme;
use ratatui::{buffer::Buffer, layout::Rect};
use sportstalk_engine::{AnswerService, AskError, Message, Sender};

/// Default terminal width for tests.
pub const TEST_WIDTH: u16 = 80;

/// Default terminal height for tests.
pub const TEST_HEIGHT: u16 = 24;

/// Create a test app with an empty conversation.
pub fn create_test_app() -> App {
    App::new(Theme::default())
}

/// Create a test app that has already exchanged one question and answer.
pub fn create_test_app_with_exchange() -> App {
    let mut app = create_test_app();
    for message in sample_messages() {
        match message.sender {
            Sender::User => {
                app.conversation
                    .begin_turn(&message.content)
                    .expect("idle conversation")
                    .expect("non-blank question");
            }
            Sender::Assistant => {
                app.conversation
                    .complete_turn(Ok(message.content))
                    .expect("pending turn");
            }
        }
    }
    app
}

/// One user question and its answer.
pub fn sample_messages() -> Vec<Message> {
    vec![
        Message {
            id: 1,
            sender: Sender::User,
            content: "Who has the most rings?".to_string(),
        },
        Message {
            id: 2,
            sender: Sender::Assistant,
            content: "Tom Brady, with seven.".to_string(),
        },
    ]
}

/// Answer service that replays scripted replies and records each question.
///
/// `None` replies fail with an HTTP 500.
pub struct ScriptedService {
    replies: Mutex<VecDeque<Option<&'static str>>>,
    questions: Mutex<Vec<String>>,
}

impl ScriptedService {
    pub fn new(replies: impl IntoIterator<Item = Option<&'static str>>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            questions: Mutex::new(Vec::new()),
        }
    }

    /// Questions received so far, in order.
    pub fn questions(&self) -> Vec<String> {
        self.questions.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl AnswerService for ScriptedService {
    async fn ask(&self, question: &str) -> Result<String, AskError> {
        self.questions.lock().unwrap().push(question.to_string());
        match self.replies.lock().unwrap().pop_front().flatten() {
            Some(answer) => Ok(answer.to_string()),
            None => Err(AskError::Status(500)),
        }
    }
}

/// Convert a buffer to a string representation for snapshot testing.
///
/// This produces a simple text representation of the buffer content,
/// suitable for snapshot comparison.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    crate::headless::buffer_to_string(buffer)
}

/// Render a screen to a buffer and return it as a string.
pub fn render_screen_to_string<S: ScreenTrait>(screen: &S, app: &App) -> String {
    render_screen_to_string_sized(screen, app, TEST_WIDTH, TEST_HEIGHT)
}

/// Render a screen to a buffer and return it as a string with custom dimensions.
pub fn render_screen_to_string_sized<S: ScreenTrait>(
    screen: &S,
    app: &App,
    width: u16,
    height: u16,
) -> String {
    let area = Rect::new(0, 0, width, height);
    let mut buffer = Buffer::empty(area);
    screen.render(app, area, &mut buffer);
    buffer_to_string(&buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exchange_matches_sample_messages() {
        let app = create_test_app_with_exchange();
        assert_eq!(app.conversation.messages(), sample_messages().as_slice());
        assert!(!app.is_pending());
    }

    #[test]
    fn test_buffer_to_string() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buffer = Buffer::empty(area);
        buffer.set_string(0, 0, "Hello", ratatui::style::Style::default());
        buffer.set_string(0, 1, "World", ratatui::style::Style::default());

        let result = buffer_to_string(&buffer);
        assert_eq!(result, "Hello\nWorld\n");
    }
}
