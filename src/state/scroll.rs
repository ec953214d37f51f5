//! Vertical scroll offset for long pages.

/// Lines moved by PageUp / PageDown.
pub const PAGE_STEP: u16 = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub offset: u16,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll_up(&mut self, amount: u16) {
        self.offset = self.offset.saturating_sub(amount);
    }

    /// Scrolls down, stopping at `max`.
    pub fn scroll_down(&mut self, amount: u16, max: u16) {
        self.offset = self.offset.saturating_add(amount).min(max);
    }

    /// Pulls the offset back to `max` after the viewport grew or the page changed.
    pub fn clamp(&mut self, max: u16) {
        self.offset = self.offset.min(max);
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }
}
