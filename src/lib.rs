//! termspan - convert ANSI/VT terminal output to styled HTML.
//!
//! The core is [`to_html`], a pure function that never fails. The
//! remaining modules back the `termspan` command-line tool.

pub mod config;
pub mod document;
pub mod html;
pub mod stylesheet;

pub use config::{Config, ConfigError};
pub use document::Document;
pub use html::to_html;
