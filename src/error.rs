//! Error types for formatting operations

use thiserror::Error;

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, FormatError>;

/// Errors raised while resolving or applying a formatter chain
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A chain referenced a name the registry does not know
    #[error("unknown formatter: {0:?}")]
    UnknownFormatter(String),
}
