//! Text wrapping utilities.

/// Wrap a plain text string to the specified width.
///
/// Explicit newlines are kept as line breaks, including blank lines, so
/// multi-paragraph answers keep their shape. Returns at least one line.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = if width == 0 {
        text.lines().map(str::to_string).collect()
    } else {
        textwrap::wrap(text, width)
            .into_iter()
            .map(std::borrow::Cow::into_owned)
            .collect()
    };
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
