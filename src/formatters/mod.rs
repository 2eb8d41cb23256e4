//! Word formatters for dictated text
//!
//! Turns a list of spoken words into identifiers, quoted strings, titles and
//! the like by chaining named formatters.
//!
//! # Example
//!
//! ```
//! use dictfmt::formatters::format;
//!
//! let out = format(&["get", "user", "name"], &["camel"]).unwrap();
//! assert_eq!(out, "getUserName");
//! ```

mod compose;
pub mod registry;

pub use compose::{
    format, format_formatters, format_single, format_text, list_formatter_names, resolve_chain,
};
pub use registry::{Formatter, Spacing};
