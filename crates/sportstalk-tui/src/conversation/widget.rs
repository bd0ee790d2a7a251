//! Conversation pane widget.
//!
//! Shows the transcript as a scrolling list, plus a transient typing row
//! while an answer is outstanding.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};
use sportstalk_engine::{Message, Sender, TYPING_PLACEHOLDER};

use crate::theme::Theme;

use super::message::message_lines;
use super::scroll::TranscriptScroll;

/// Title shown on the pane border.
pub const TITLE: &str = " Sports Talk Expert ";

/// Transcript pane.
///
/// ```text
/// ┌─ Sports Talk Expert ─────────────────┐
/// │You                                   │
/// │  Who has the most rings?             │
/// │                                      │
/// │Expert                                │
/// │  Typing...                           │
/// └──────────────────────────────────────┘
/// ```
pub struct ConversationPane<'a> {
    messages: &'a [Message],
    scroll: TranscriptScroll,
    theme: &'a Theme,
    pending: bool,
}

impl<'a> ConversationPane<'a> {
    /// Create a pane over a transcript.
    pub fn new(messages: &'a [Message], theme: &'a Theme) -> Self {
        Self {
            messages,
            scroll: TranscriptScroll::new(),
            theme,
            pending: false,
        }
    }

    /// Show the typing row after the last message.
    #[must_use]
    pub fn pending(mut self, pending: bool) -> Self {
        self.pending = pending;
        self
    }

    /// Set the scroll position.
    #[must_use]
    pub fn scroll(mut self, scroll: TranscriptScroll) -> Self {
        self.scroll = scroll;
        self
    }

    /// All transcript lines for a given content width.
    pub fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        let typing: Option<(Sender, &str)> =
            self.pending.then_some((Sender::Assistant, TYPING_PLACEHOLDER));
        let entries = self
            .messages
            .iter()
            .map(|m| (m.sender, m.content.as_str()))
            .chain(typing);

        for (i, (sender, content)) in entries.enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }
            lines.extend(message_lines(sender, content, self.theme, width));
        }
        lines
    }

    /// Furthest the view can scroll back when drawn into `area`.
    pub fn max_scroll(&self, area: Rect) -> usize {
        let inner = self.block().inner(area);
        if inner.width == 0 || inner.height == 0 {
            return 0;
        }
        self.lines(inner.width as usize)
            .len()
            .saturating_sub(inner.height as usize)
    }

    fn block(&self) -> Block<'static> {
        Block::default()
            .title(TITLE)
            .title_style(Style::default().fg(self.theme.primary))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border))
            .style(Style::default().bg(self.theme.base))
    }
}

impl Widget for ConversationPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.block();
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if self.messages.is_empty() && !self.pending {
            Paragraph::new("No messages yet.")
                .style(Style::default().fg(self.theme.muted))
                .alignment(Alignment::Center)
                .render(inner, buf);
            return;
        }

        let lines = self.lines(inner.width as usize);
        let height = inner.height as usize;
        let start = self.scroll.first_visible(lines.len(), height);
        let visible: Vec<Line<'static>> = lines.into_iter().skip(start).take(height).collect();

        Paragraph::new(visible).render(inner, buf);
    }
}
