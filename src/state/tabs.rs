//! Tab navigation state.
//!
//! Tracks the active section and the compact navigation overlay used when the
//! terminal is too narrow for the tab bar.

use crate::section::{Section, SECTION_MENU};

/// State for section navigation.
#[derive(Debug, Clone, Default)]
pub struct TabState {
    /// Section currently rendered in the content area.
    pub active: Section,
    /// Whether the compact navigation overlay is open.
    pub menu_open: bool,
    /// Highlighted row of the overlay.
    pub menu_cursor: usize,
}

impl TabState {
    /// Creates a navigation state showing the home section.
    pub fn new() -> Self {
        Self::default()
    }

    /// Activates `section` and collapses the overlay.
    ///
    /// Returns `true` if the active section changed.
    pub fn select_section(&mut self, section: Section) -> bool {
        let changed = self.active != section;
        self.active = section;
        self.menu_open = false;
        self.menu_cursor = section.menu_index();
        changed
    }

    /// Activates the section named by `id`, or home if the id is unknown.
    pub fn select_by_id(&mut self, id: &str) -> bool {
        self.select_section(Section::from_id(id))
    }

    /// Activates the section at menu row `idx`, or home if out of range.
    pub fn select_by_index(&mut self, idx: usize) -> bool {
        self.select_section(Section::from_index(idx))
    }

    pub fn next_section(&mut self) -> bool {
        self.select_section(self.active.next())
    }

    pub fn prev_section(&mut self) -> bool {
        self.select_section(self.active.prev())
    }

    /// Opens or closes the overlay. Opening puts the cursor on the active row.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        if self.menu_open {
            self.menu_cursor = self.active.menu_index();
        }
    }

    /// Moves the overlay cursor up.
    ///
    /// Returns `true` if the cursor moved.
    pub fn menu_up(&mut self) -> bool {
        if self.menu_cursor > 0 {
            self.menu_cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Moves the overlay cursor down.
    ///
    /// Returns `true` if the cursor moved.
    pub fn menu_down(&mut self) -> bool {
        if self.menu_cursor < SECTION_MENU.len() - 1 {
            self.menu_cursor += 1;
            true
        } else {
            false
        }
    }

    /// Selects the highlighted overlay row.
    pub fn confirm_menu(&mut self) -> bool {
        self.select_by_index(self.menu_cursor)
    }
}
