use crate::config::RelayMode;
use crate::data::Portfolio;
use crate::state::{BlogState, ContactForm, TabState};

/// Read-only view of the app handed to the screen on every draw
pub struct RenderContext<'a> {
    pub portfolio: &'a Portfolio,
    pub tabs: &'a TabState,
    pub contact: &'a ContactForm,
    pub blog: &'a BlogState,

    /// Offset of the scrollable page or open blog post
    pub scroll: u16,
    /// Contact form has keyboard focus
    pub editing: bool,
    pub show_help: bool,
    pub relay_mode: RelayMode,

    // Status bar
    pub status: &'a str,
}
