//! Application state and update logic for the sportstalk TUI.

use crate::conversation::{TranscriptScroll, SCROLL_SPEED};
use crate::event::Action;
use crate::theme::Theme;
use crate::widgets::TextInputState;
use sportstalk_engine::{AskError, Conversation, ConversationError, Turn};
use tracing::{debug, warn};

/// Notice shown when Enter is pressed while an answer is outstanding.
pub const BUSY_NOTICE: &str = "Waiting for the current answer...";

/// Lines moved per PgUp/PgDn.
const PAGE_LINES: usize = 10;

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Whether the app should quit.
    pub should_quit: bool,

    /// Transcript and request state.
    pub conversation: Conversation,

    /// Message being composed.
    pub input: TextInputState,

    /// Transcript scroll position.
    pub scroll: TranscriptScroll,

    /// Color palette.
    pub theme: Theme,

    /// One-line status shown in the footer.
    pub notice: Option<String>,
}

impl App {
    /// Create a new app with an empty conversation.
    pub fn new(theme: Theme) -> Self {
        Self {
            should_quit: false,
            conversation: Conversation::new(),
            input: TextInputState::new(),
            scroll: TranscriptScroll::new(),
            theme,
            notice: None,
        }
    }

    /// Whether an answer is outstanding.
    pub fn is_pending(&self) -> bool {
        self.conversation.is_pending()
    }

    /// Handle an action.
    ///
    /// Returns the turn to send when the action submitted a question.
    pub fn handle_action(&mut self, action: Action) -> Option<Turn> {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Submit => return self.submit_input(),
            Action::Newline => self.input.insert('\n'),
            Action::Insert(c) => self.input.insert(c),
            Action::Backspace => self.input.backspace(),
            Action::Delete => self.input.delete(),
            Action::Left => self.input.move_left(),
            Action::Right => self.input.move_right(),
            Action::Home => self.input.move_home(),
            Action::End => self.input.move_end(),
            Action::Up => {
                if self.input.is_empty() || self.input.is_browsing_history() {
                    self.input.history_prev();
                } else {
                    self.scroll.scroll_up(1);
                }
            }
            Action::Down => {
                if self.input.is_browsing_history() {
                    self.input.history_next();
                } else {
                    self.scroll.scroll_down(1);
                }
            }
            Action::PageUp => self.scroll.scroll_up(PAGE_LINES),
            Action::PageDown => self.scroll.scroll_down(PAGE_LINES),
            Action::ScrollUp => self.scroll.scroll_up(SCROLL_SPEED),
            Action::ScrollDown => self.scroll.scroll_down(SCROLL_SPEED),
            Action::None => {}
        }
        None
    }

    /// Try to send the input buffer.
    ///
    /// Blank input is ignored. While an answer is outstanding the buffer is
    /// kept and a notice is shown instead.
    fn submit_input(&mut self) -> Option<Turn> {
        match self.conversation.begin_turn(self.input.content()) {
            Ok(Some(turn)) => {
                self.input.submit();
                self.scroll.follow();
                self.notice = None;
                debug!(messages = self.conversation.len(), "question submitted");
                Some(turn)
            }
            Ok(None) => None,
            Err(ConversationError::Busy) => {
                self.notice = Some(BUSY_NOTICE.to_string());
                None
            }
            Err(e) => {
                warn!(error = %e, "unexpected conversation state");
                None
            }
        }
    }

    /// Record the outcome of the outstanding request.
    pub fn apply_outcome(&mut self, outcome: Result<String, AskError>) {
        if let Err(e) = self.conversation.complete_turn(outcome) {
            warn!(error = %e, "dropping stale answer");
            return;
        }
        self.notice = None;
        self.scroll.follow();
    }
}
