//! Clipboard word source
//!
//! Fallback when a format command arrives without a phrase: the current
//! clipboard text is split on spaces and formatted instead.

use crate::dictation::split_blob;
use arboard::Clipboard;

/// Error type for clipboard access
#[derive(Debug, thiserror::Error)]
#[error("Clipboard error: {0}")]
pub struct ClipboardError(String);

/// Read the clipboard and split it into words
///
/// Non-text or empty clipboard contents yield no words.
pub fn clipboard_words() -> Result<Vec<String>, ClipboardError> {
    let mut clipboard = Clipboard::new()
        .map_err(|e| ClipboardError(format!("Failed to initialize clipboard: {}", e)))?;

    match clipboard.get_text() {
        Ok(text) => Ok(split_blob(&text)),
        Err(arboard::Error::ContentNotAvailable) => {
            tracing::debug!("clipboard holds no text");
            Ok(Vec::new())
        }
        Err(e) => Err(ClipboardError(format!("Failed to read clipboard: {}", e))),
    }
}

/// Replace the clipboard contents with formatted text
pub fn set_clipboard(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard = Clipboard::new()
        .map_err(|e| ClipboardError(format!("Failed to initialize clipboard: {}", e)))?;
    clipboard
        .set_text(text)
        .map_err(|e| ClipboardError(format!("Failed to set clipboard: {}", e)))
}
