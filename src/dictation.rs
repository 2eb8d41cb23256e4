//! Dictation front end
//!
//! Cleans up transcribed input before it reaches the formatters and
//! recognizes spoken format commands of the form `<formatter>+ <phrase>`,
//! e.g. "snake allcaps max retries over".

use crate::error::Result;
use crate::formatters::{self, Formatter, registry};

/// Word that ends a dictated phrase
pub const DEFAULT_TERMINATOR: &str = "over";

/// Drop a trailing terminator word ("over") from dictated words
pub fn strip_terminator<'a, W: AsRef<str>>(words: &'a [W], terminator: &str) -> &'a [W] {
    match words.split_last() {
        Some((last, rest)) if last.as_ref() == terminator => rest,
        _ => words,
    }
}

/// Format dictated words, dropping a trailing "over" first
pub fn format_dictation<W, N>(words: &[W], chain: &[N]) -> Result<String>
where
    W: AsRef<str>,
    N: AsRef<str>,
{
    formatters::format(strip_terminator(words, DEFAULT_TERMINATOR), chain)
}

/// Split a raw text blob (clipboard, selection) into words on single spaces
///
/// Empty fragments left by repeated spaces are dropped, so `"a  b"` is two
/// words and an empty or blank blob yields no words.
pub fn split_blob(text: &str) -> Vec<String> {
    text.split(' ')
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// A recognized spoken format command
#[derive(Debug, Clone, PartialEq)]
pub struct FormatCommand {
    /// Formatters in the order they were spoken
    pub formatters: Vec<Formatter>,
    /// The phrase to format (may be empty)
    pub words: Vec<String>,
}

impl FormatCommand {
    /// Whether the command carried no phrase of its own
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Apply the spoken formatters to the phrase
    pub fn render(&self) -> String {
        formatters::format_formatters(&self.words, &self.formatters)
    }

    /// Apply the spoken formatters to words from another source
    pub fn render_words<W: AsRef<str>>(&self, words: &[W]) -> String {
        formatters::format_formatters(words, &self.formatters)
    }
}

/// Parser for spoken format commands
#[derive(Debug, Clone)]
pub struct CommandParser {
    /// Word that ends a phrase (lowercase)
    terminator: String,
    /// Whether to drop the terminator at all
    strip_terminator: bool,
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new(DEFAULT_TERMINATOR, true)
    }
}

impl CommandParser {
    pub fn new(terminator: &str, strip_terminator: bool) -> Self {
        Self {
            terminator: terminator.to_lowercase(),
            strip_terminator,
        }
    }

    /// Parse an utterance like "camel get user name over"
    ///
    /// Leading spoken formatter names make up the chain, everything after is
    /// the phrase. Returns `None` when the utterance does not open with a
    /// formatter.
    pub fn parse(&self, utterance: &str) -> Option<FormatCommand> {
        let tokens: Vec<&str> = utterance.split_whitespace().collect();

        let mut formatters = Vec::new();
        let mut rest = tokens.as_slice();
        while let Some((token, tail)) = rest.split_first() {
            match registry::from_spoken(normalize(token)) {
                Some(f) => {
                    formatters.push(f);
                    rest = tail;
                }
                None => break,
            }
        }

        if formatters.is_empty() {
            tracing::debug!(utterance, "no leading formatter");
            return None;
        }

        let mut words: Vec<String> = rest.iter().map(|w| w.to_string()).collect();
        if self.strip_terminator
            && words
                .last()
                .is_some_and(|w| normalize(w).eq_ignore_ascii_case(&self.terminator))
        {
            words.pop();
        }

        tracing::debug!(?formatters, ?words, "parsed format command");
        Some(FormatCommand { formatters, words })
    }
}

/// Strip trailing punctuation the transcriber tends to add ("snake." -> "snake")
fn normalize(token: &str) -> &str {
    token.trim_end_matches(|c: char| c.is_ascii_punctuation())
}
