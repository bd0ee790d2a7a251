//! Cell widths for fitting text into a fixed number of terminal columns.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Marker appended to shortened text.
const ELLIPSIS: char = '…';

/// Terminal cells `s` occupies. Wide characters (CJK, emoji) count as two.
pub fn visual_width(s: &str) -> usize {
    s.width()
}

/// Shorten `s` to at most `max_width` cells, ending in `…` when cut.
///
/// Whole characters only; a wide character that would straddle the limit
/// is dropped.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out: String = s
        .chars()
        .take_while(|c| {
            used += c.width().unwrap_or(0);
            used <= budget
        })
        .collect();
    out.push(ELLIPSIS);
    out
}
