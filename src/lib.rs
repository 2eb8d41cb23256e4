//! Format dictated words with chains of named formatters
//!
//! "snake allcaps max retries" becomes `MAX_RETRIES`, "camel get user name"
//! becomes `getUserName`.

#[cfg(feature = "clipboard")]
pub mod clipboard;
pub mod config;
pub mod dictation;
pub mod error;
pub mod formatters;

pub use error::{FormatError, Result};
pub use formatters::{
    Formatter, Spacing, format, format_single, format_text, list_formatter_names,
};
