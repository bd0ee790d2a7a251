//! Full-width input bar widget.
//!
//! Always visible at the bottom of the screen for text entry.
//! Supports multi-line input with Ctrl+J for newlines.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use sportstalk_engine::INPUT_PLACEHOLDER;

use super::text_input::TextInputState;
use crate::theme::Theme;

/// Most content lines shown before the bar scrolls.
pub const MAX_VISIBLE_LINES: u16 = 5;

/// Full-width input bar for text entry.
pub struct InputBar<'a> {
    input: &'a TextInputState,
    theme: &'a Theme,
}

impl<'a> InputBar<'a> {
    /// Create a new input bar widget.
    pub fn new(input: &'a TextInputState, theme: &'a Theme) -> Self {
        Self { input, theme }
    }

    /// Height including borders for the given input.
    #[allow(clippy::cast_possible_truncation)]
    pub fn height_for(input: &TextInputState) -> u16 {
        let lines = input.content().split('\n').count().max(1) as u16;
        lines.min(MAX_VISIBLE_LINES) + 2
    }

    /// Build Lines for multi-line input display.
    /// Returns the lines to display and which line index contains the cursor.
    fn build_input_lines(&self) -> (Vec<Line<'static>>, usize) {
        let (cursor_line, cursor_col) = self.input.cursor_line_col();
        let text_style = Style::default().fg(self.theme.text);

        let mut lines = Vec::new();
        for (line_idx, line_text) in self.input.content().split('\n').enumerate() {
            let prefix = if line_idx == 0 { "> " } else { "  " };
            let mut spans = vec![Span::styled(prefix, Style::default().fg(self.theme.primary))];

            if line_idx == cursor_line {
                let before: String = line_text.chars().take(cursor_col).collect();
                let after: String = line_text.chars().skip(cursor_col).collect();
                spans.push(Span::styled(before, text_style));
                spans.push(Span::styled("█", text_style));
                spans.push(Span::styled(after, text_style));
            } else {
                spans.push(Span::styled(line_text.to_string(), text_style));
            }
            lines.push(Line::from(spans));
        }

        (lines, cursor_line)
    }
}

#[allow(clippy::cast_possible_truncation)]
impl Widget for InputBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_focused))
            .style(Style::default().bg(self.theme.surface));

        let inner_height = area.height.saturating_sub(2) as usize;

        let paragraph = if self.input.is_empty() {
            let spans = vec![
                Span::styled("> ", Style::default().fg(self.theme.primary)),
                Span::styled("█", Style::default().fg(self.theme.text)),
                Span::styled(INPUT_PLACEHOLDER, Style::default().fg(self.theme.muted)),
            ];
            Paragraph::new(Line::from(spans)).block(block)
        } else {
            let (lines, cursor_line) = self.build_input_lines();

            // Keep the cursor line visible
            let scroll_offset = if lines.len() <= inner_height {
                0
            } else {
                cursor_line.saturating_sub(inner_height.saturating_sub(1))
            };

            Paragraph::new(lines)
                .block(block)
                .scroll((scroll_offset as u16, 0))
        };

        paragraph.render(area, buf);
    }
}
