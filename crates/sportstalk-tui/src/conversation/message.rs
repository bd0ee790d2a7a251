//! Message renderer.
//!
//! Maps a single `(sender, content)` pair to display lines. Both senders
//! share one layout; the sender only picks the label and its color.
//!
//! ```text
//! You
//!   Who has the most Super Bowl rings?
//! Expert
//!   Tom Brady, with seven.
//! ```

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use sportstalk_engine::Sender;

use crate::text::wrap_text;
use crate::theme::Theme;

/// Indent applied to content lines under the sender label.
pub const CONTENT_INDENT: &str = "  ";

/// Display label for a sender.
#[must_use]
pub fn sender_label(sender: Sender) -> &'static str {
    match sender {
        Sender::User => "You",
        Sender::Assistant => "Expert",
    }
}

/// Render one message to lines fitting `width` columns.
///
/// Content is shown verbatim apart from soft wrapping.
pub fn message_lines(
    sender: Sender,
    content: &str,
    theme: &Theme,
    width: usize,
) -> Vec<Line<'static>> {
    let label_style = Style::default()
        .fg(theme.sender(sender))
        .add_modifier(Modifier::BOLD);
    let content_style = Style::default().fg(theme.text);

    let wrap_width = width.saturating_sub(CONTENT_INDENT.len());
    let mut lines = vec![Line::from(Span::styled(sender_label(sender), label_style))];
    lines.extend(wrap_text(content, wrap_width).into_iter().map(|text| {
        Line::from(vec![
            Span::raw(CONTENT_INDENT),
            Span::styled(text, content_style),
        ])
    }));
    lines
}

/// Widget form of [`message_lines`] for drawing a single message.
pub struct MessageView<'a> {
    sender: Sender,
    content: &'a str,
    theme: &'a Theme,
}

impl<'a> MessageView<'a> {
    /// Create a view of one message.
    pub fn new(sender: Sender, content: &'a str, theme: &'a Theme) -> Self {
        Self {
            sender,
            content,
            theme,
        }
    }
}

impl Widget for MessageView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = message_lines(self.sender, self.content, self.theme, area.width as usize);
        Paragraph::new(lines).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use insta::assert_snapshot;
    use sportstalk_engine::{FALLBACK_ANSWER, TYPING_PLACEHOLDER};

    fn render(sender: Sender, content: &str, width: u16, height: u16) -> String {
        let theme = Theme::default();
        let area = Rect::new(0, 0, width, height);
        let mut buffer = Buffer::empty(area);
        MessageView::new(sender, content, &theme).render(area, &mut buffer);
        buffer_to_string(&buffer)
    }

    #[test]
    fn test_user_message_snapshot() {
        assert_snapshot!(render(Sender::User, "Who won?", 20, 2), @r"
        You
          Who won?
        ");
    }

    #[test]
    fn test_wrapped_assistant_snapshot() {
        assert_snapshot!(render(Sender::Assistant, "Tom Brady has seven rings", 14, 4), @r"
        Expert
          Tom Brady
          has seven
          rings
        ");
    }

    #[test]
    fn test_senders_share_structure() {
        let theme = Theme::default();
        let user = message_lines(Sender::User, "same text", &theme, 40);
        let assistant = message_lines(Sender::Assistant, "same text", &theme, 40);

        assert_eq!(user.len(), assistant.len());
        assert_eq!(user[1], assistant[1]);
        assert_ne!(user[0].spans[0].style, assistant[0].spans[0].style);
    }

    #[test]
    fn test_content_is_verbatim() {
        let theme = Theme::default();
        for content in [FALLBACK_ANSWER, TYPING_PLACEHOLDER, "<b>not markup</b>"] {
            let lines = message_lines(Sender::Assistant, content, &theme, 80);
            assert_eq!(lines.len(), 2);
            assert_eq!(lines[1].spans[1].content, content);
        }
    }

    #[test]
    fn test_empty_content_still_has_body_line() {
        let theme = Theme::default();
        let lines = message_lines(Sender::User, "", &theme, 10);
        assert_eq!(lines.len(), 2);
    }
}
