//! Applies a chain of formatters to a phrase
//!
//! Formatters run per word in reverse chain order: the last listed formatter
//! sees the raw word, the first listed one gets the final say. Spacing is
//! sticky: a single `NoSeparator` formatter anywhere in the chain removes
//! every inter-word space.

use super::registry::{self, Formatter, Spacing};
use crate::error::Result;
use std::collections::BTreeSet;

/// Format `words` with the formatters named in `chain`
///
/// All names are resolved before any word is touched, so an unknown name
/// fails the whole call without partial output.
pub fn format<W, N>(words: &[W], chain: &[N]) -> Result<String>
where
    W: AsRef<str>,
    N: AsRef<str>,
{
    let formatters = resolve_chain(chain)?;
    Ok(format_formatters(words, &formatters))
}

/// Format `words` with an already resolved chain
pub fn format_formatters<W: AsRef<str>>(words: &[W], formatters: &[Formatter]) -> String {
    let mut spaces = true;
    let last = words.len().saturating_sub(1);

    let formatted: Vec<String> = words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let mut word = word.as_ref().to_string();
            for f in formatters.iter().rev() {
                word = f.apply(i, &word, i == last);
                spaces = spaces && f.spacing() != Spacing::NoSeparator;
            }
            word
        })
        .collect();

    let sep = if spaces { " " } else { "" };
    let out = formatted.join(sep);
    tracing::trace!(?formatters, words = words.len(), %out, "formatted");
    out
}

/// Format one word with one formatter
pub fn format_single(word: &str, name: &str) -> Result<String> {
    format(&[word], &[name])
}

/// Format a bare string as a single word; the text is not split
pub fn format_text<N: AsRef<str>>(text: &str, chain: &[N]) -> Result<String> {
    format(&[text], chain)
}

/// Resolve every name in `chain`, failing on the first unknown one
pub fn resolve_chain<N: AsRef<str>>(chain: &[N]) -> Result<Vec<Formatter>> {
    chain.iter().map(|name| registry::get(name.as_ref())).collect()
}

/// Every name accepted in a chain: canonical names and spoken aliases
pub fn list_formatter_names() -> BTreeSet<&'static str> {
    Formatter::ALL
        .iter()
        .flat_map(|f| [f.name(), f.spoken()])
        .collect()
}
