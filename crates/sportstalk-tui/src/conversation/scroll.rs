//! Transcript scroll state.
//!
//! Scrolling is measured in lines back from the bottom, so a value of zero
//! follows new messages as they arrive.

/// Lines scrolled per mouse wheel tick.
pub const SCROLL_SPEED: usize = 3;

/// Scroll position of the transcript.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranscriptScroll {
    back: usize,
}

impl TranscriptScroll {
    /// Create a scroll state pinned to the bottom.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the view sticks to the newest line.
    pub fn is_following(&self) -> bool {
        self.back == 0
    }

    /// Lines scrolled back from the bottom.
    pub fn lines_back(&self) -> usize {
        self.back
    }

    /// Scroll towards older messages.
    pub fn scroll_up(&mut self, amount: usize) {
        self.back = self.back.saturating_add(amount);
    }

    /// Scroll towards newer messages.
    pub fn scroll_down(&mut self, amount: usize) {
        self.back = self.back.saturating_sub(amount);
    }

    /// Limit the position to `max_back` lines, the furthest the view can go.
    ///
    /// Called on every draw so scrolling past the top does not have to be
    /// undone key by key.
    pub fn clamp(&mut self, max_back: usize) {
        self.back = self.back.min(max_back);
    }

    /// Jump back to the newest line and follow from there.
    pub fn follow(&mut self) {
        self.back = 0;
    }

    /// First visible line for `total` lines in a viewport of `height`.
    ///
    /// Scrolling past the top clamps to the first line.
    pub fn first_visible(&self, total: usize, height: usize) -> usize {
        let bottom_start = total.saturating_sub(height);
        bottom_start.saturating_sub(self.back.min(bottom_start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_following() {
        let scroll = TranscriptScroll::new();
        assert!(scroll.is_following());
        assert_eq!(scroll.first_visible(30, 10), 20);
    }

    #[test]
    fn test_scroll_up_and_down() {
        let mut scroll = TranscriptScroll::new();
        scroll.scroll_up(5);
        assert!(!scroll.is_following());
        assert_eq!(scroll.first_visible(30, 10), 15);

        scroll.scroll_down(2);
        assert_eq!(scroll.first_visible(30, 10), 17);

        scroll.scroll_down(100);
        assert!(scroll.is_following());
    }

    #[test]
    fn test_clamps_at_top() {
        let mut scroll = TranscriptScroll::new();
        scroll.scroll_up(1000);
        assert_eq!(scroll.first_visible(30, 10), 0);
    }

    #[test]
    fn test_short_transcript_starts_at_zero() {
        let mut scroll = TranscriptScroll::new();
        assert_eq!(scroll.first_visible(4, 10), 0);
        scroll.scroll_up(3);
        assert_eq!(scroll.first_visible(4, 10), 0);
    }

    #[test]
    fn test_clamped_overscroll_recovers_in_one_step() {
        let mut scroll = TranscriptScroll::new();
        for _ in 0..10 {
            scroll.scroll_up(10);
            scroll.clamp(20);
        }
        assert_eq!(scroll.first_visible(30, 10), 0);

        scroll.scroll_down(10);
        assert_eq!(scroll.first_visible(30, 10), 10);
    }

    #[test]
    fn test_clamp_keeps_smaller_offsets() {
        let mut scroll = TranscriptScroll::new();
        scroll.scroll_up(4);
        scroll.clamp(20);
        assert_eq!(scroll.lines_back(), 4);
        scroll.clamp(0);
        assert!(scroll.is_following());
    }

    #[test]
    fn test_follow_resets() {
        let mut scroll = TranscriptScroll::new();
        scroll.scroll_up(SCROLL_SPEED);
        scroll.follow();
        assert_eq!(scroll.lines_back(), 0);
    }
}
