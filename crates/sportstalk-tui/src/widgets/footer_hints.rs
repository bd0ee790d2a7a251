//! Footer keybinding hints.
//!
//! Format: `[Enter] send │ [Ctrl+J] newline │ [PgUp/PgDn] scroll │ [Esc] quit`
//!
//! The send hint is dimmed while an answer is outstanding, mirroring the
//! disabled send action. An optional notice is shown on the left.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::text::{truncate_to_width, visual_width};
use crate::theme::Theme;

/// A single keybinding hint.
#[derive(Debug, Clone)]
pub struct KeyHint {
    /// The key or key combination (e.g., "Enter", "Ctrl+J").
    pub key: String,
    /// The action description (e.g., "send", "quit").
    pub action: String,
}

impl KeyHint {
    /// Create a new key hint.
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Footer hints widget.
pub struct FooterHints<'a> {
    theme: &'a Theme,
    send_enabled: bool,
    notice: Option<&'a str>,
}

impl<'a> FooterHints<'a> {
    /// Create a new footer hints widget.
    pub fn new(theme: &'a Theme) -> Self {
        Self {
            theme,
            send_enabled: true,
            notice: None,
        }
    }

    /// Whether the send action is currently available.
    #[must_use]
    pub fn send_enabled(mut self, enabled: bool) -> Self {
        self.send_enabled = enabled;
        self
    }

    /// Short status message shown before the hints.
    #[must_use]
    pub fn notice(mut self, notice: Option<&'a str>) -> Self {
        self.notice = notice;
        self
    }

    /// Hints for the chat screen.
    pub fn chat_hints(send_enabled: bool) -> Vec<KeyHint> {
        let send = if send_enabled { "send" } else { "send (waiting)" };
        vec![
            KeyHint::new("Enter", send),
            KeyHint::new("Ctrl+J", "newline"),
            KeyHint::new("PgUp/PgDn", "scroll"),
            KeyHint::new("Esc", "quit"),
        ]
    }

    fn hint_spans(&self) -> Vec<Span<'static>> {
        let key_style = Style::default().fg(self.theme.primary);
        let action_style = Style::default().fg(self.theme.subtext);
        let disabled_style = Style::default()
            .fg(self.theme.muted)
            .add_modifier(Modifier::DIM);
        let separator_style = Style::default().fg(self.theme.border);

        let mut spans = Vec::new();
        for (i, hint) in Self::chat_hints(self.send_enabled).into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", separator_style));
            }
            let disabled = i == 0 && !self.send_enabled;
            let (key_style, action_style) = if disabled {
                (disabled_style, disabled_style)
            } else {
                (key_style, action_style)
            };
            spans.push(Span::styled(format!("[{}]", hint.key), key_style));
            spans.push(Span::styled(format!(" {}", hint.action), action_style));
        }
        spans
    }
}

impl Widget for FooterHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let hints = self.hint_spans();
        let hints_width: usize = hints.iter().map(|s| visual_width(&s.content)).sum();
        let width = area.width as usize;

        let mut spans = Vec::new();
        if let Some(notice) = self.notice {
            let room = width.saturating_sub(hints_width + 1);
            if room > 3 {
                let notice = truncate_to_width(notice, room);
                let padding = room - visual_width(&notice);
                spans.push(Span::styled(notice, Style::default().fg(self.theme.error)));
                spans.push(Span::raw(" ".repeat(padding + 1)));
            }
        }
        spans.extend(hints);

        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(self.theme.base))
            .render(area, buf);
    }
}
