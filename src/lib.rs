// Library for testable modules
pub mod app;
pub mod async_task;
pub mod cli;
pub mod config;
pub mod data;
pub mod key_handler;
pub mod logging;
pub mod markdown;
pub mod pages;
pub mod relay;
pub mod render_context;
pub mod resume;
pub mod screen;
pub mod section;
pub mod state;
pub mod ui_utils;

// Re-export main types used in tests
pub use app::App;
pub use config::{RelayMode, Settings};
pub use data::Portfolio;
pub use relay::{MessageRelay, RelayMessage};
pub use section::Section;
pub use state::{ContactForm, TabState};
