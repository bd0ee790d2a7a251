//! Chat screen - the transcript above the message box.
//!
//! ```text
//! ┌ Sports Talk Expert ────────────┐
//! │You                             │
//! │  Who has the most rings?       │
//! └────────────────────────────────┘
//! ┌────────────────────────────────┐
//! │> █Ask your sports question...  │
//! └────────────────────────────────┘
//! [Enter] send │ [Ctrl+J] newline …
//! ```

use crate::app::App;
use crate::conversation::ConversationPane;
use crate::screens::Screen;
use crate::widgets::{FooterHints, InputBar};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Widget,
};

/// The chat screen.
pub struct ChatScreen;

impl ChatScreen {
    /// Transcript, message box and footer areas.
    fn layout(app: &App, area: Rect) -> [Rect; 3] {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),
                Constraint::Length(InputBar::height_for(&app.input)),
                Constraint::Length(1),
            ])
            .areas(area)
    }

    fn pane(app: &App) -> ConversationPane<'_> {
        ConversationPane::new(app.conversation.messages(), &app.theme)
            .pending(app.is_pending())
            .scroll(app.scroll)
    }

    /// Furthest the transcript can scroll back at this screen size.
    pub fn max_scroll(app: &App, area: Rect) -> usize {
        let [transcript, _, _] = Self::layout(app, area);
        Self::pane(app).max_scroll(transcript)
    }
}

impl Screen for ChatScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        let [transcript, input, footer] = Self::layout(app, area);

        Self::pane(app).render(transcript, buf);

        InputBar::new(&app.input, &app.theme).render(input, buf);

        FooterHints::new(&app.theme)
            .send_enabled(!app.is_pending())
            .notice(app.notice.as_deref())
            .render(footer, buf);
    }
}
