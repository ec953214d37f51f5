//! State modules for the folio TUI.
//!
//! Each view keeps its own state struct so it can be unit tested without a
//! terminal. The root `App` owns one instance of each.
//!
//! ```text
//! App
//! ├── TabState      - Active section and compact navigation overlay
//! ├── ContactForm   - Form fields, submission status and status timer
//! ├── BlogState     - Post selection and reader overlay
//! └── ScrollState   - Offset of the scrollable content pages
//! ```

mod blog;
pub mod contact;
mod scroll;
mod tabs;

pub use blog::BlogState;
pub use contact::{
    ContactFields, ContactForm, Field, FormFocus, Submission, SubmissionId, SubmissionStatus,
};
pub use scroll::{ScrollState, PAGE_STEP};
pub use tabs::TabState;
