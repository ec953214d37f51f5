//! Blog page state.
//!
//! Tracks the highlighted post preview and which post, if any, is open in the
//! reader overlay.

/// State for the Blog view.
#[derive(Debug, Clone, Default)]
pub struct BlogState {
    /// Highlighted post in the preview list.
    pub selected: usize,
    /// Post shown in the reader, by list index.
    pub open: Option<usize>,
}

impl BlogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Navigates to the previous post.
    ///
    /// Returns `true` if the selection changed.
    pub fn navigate_up(&mut self) -> bool {
        if self.selected > 0 {
            self.selected -= 1;
            true
        } else {
            false
        }
    }

    /// Navigates to the next post.
    ///
    /// Returns `true` if the selection changed.
    pub fn navigate_down(&mut self, max_items: usize) -> bool {
        if self.selected < max_items.saturating_sub(1) {
            self.selected += 1;
            true
        } else {
            false
        }
    }

    /// Opens the highlighted post if it exists.
    pub fn open_selected(&mut self, max_items: usize) -> bool {
        if self.selected < max_items {
            self.open = Some(self.selected);
            true
        } else {
            false
        }
    }

    /// Closes the reader. Returns `true` if it was open.
    pub fn close(&mut self) -> bool {
        self.open.take().is_some()
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }
}
