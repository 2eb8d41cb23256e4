//! Formatter catalogue and name lookup
//!
//! Every formatter is a variant of [`Formatter`]. A variant knows its
//! canonical name, its spoken alias, whether it lets words stay
//! space-separated, and how it rewrites a single word given its position.

use crate::error::{FormatError, Result};
use std::fmt;
use std::str::FromStr;

/// Words that `CAPITALIZE_ALL_WORDS` leaves lowercase unless they open the phrase
const WORDS_TO_KEEP_LOWERCASE: &[&str] = &[
    "a", "an", "the", "at", "by", "for", "in", "is", "of", "on", "to", "up", "and", "as", "but",
    "or", "nor",
];

/// How a formatter wants the final words joined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spacing {
    /// Words stay space-separated unless another formatter objects
    Space,
    /// The formatter supplies its own joiner (or none), words are concatenated
    NoSeparator,
}

/// A named per-word text transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Formatter {
    // Identifier styles
    DoubleUnderscore,
    PrivateCamelCase,
    PublicCamelCase,
    SnakeCase,
    NoSpaces,

    // Joiners
    DashSeparated,
    DoubleColonSeparated,
    DotSeparated,
    SlashSeparated,

    // Case
    AllCaps,
    AllLowercase,
    CapitalizeFirstWord,
    CapitalizeAllWords,

    // Surrounding
    DoubleQuotedString,
    SingleQuotedString,
    SpaceSurroundedString,

    // Truncation
    FirstThree,
    FirstFour,
    FirstFive,
}

impl Formatter {
    /// Every formatter, in registry order
    pub const ALL: [Formatter; 19] = [
        Formatter::DoubleUnderscore,
        Formatter::PrivateCamelCase,
        Formatter::PublicCamelCase,
        Formatter::SnakeCase,
        Formatter::NoSpaces,
        Formatter::DashSeparated,
        Formatter::DoubleColonSeparated,
        Formatter::AllCaps,
        Formatter::AllLowercase,
        Formatter::DoubleQuotedString,
        Formatter::SingleQuotedString,
        Formatter::SpaceSurroundedString,
        Formatter::DotSeparated,
        Formatter::SlashSeparated,
        Formatter::CapitalizeFirstWord,
        Formatter::CapitalizeAllWords,
        Formatter::FirstThree,
        Formatter::FirstFour,
        Formatter::FirstFive,
    ];

    /// Canonical registry name, e.g. `SNAKE_CASE`
    pub fn name(self) -> &'static str {
        match self {
            Formatter::DoubleUnderscore => "DOUBLE_UNDERSCORE",
            Formatter::PrivateCamelCase => "PRIVATE_CAMEL_CASE",
            Formatter::PublicCamelCase => "PUBLIC_CAMEL_CASE",
            Formatter::SnakeCase => "SNAKE_CASE",
            Formatter::NoSpaces => "NO_SPACES",
            Formatter::DashSeparated => "DASH_SEPARATED",
            Formatter::DoubleColonSeparated => "DOUBLE_COLON_SEPARATED",
            Formatter::DotSeparated => "DOT_SEPARATED",
            Formatter::SlashSeparated => "SLASH_SEPARATED",
            Formatter::AllCaps => "ALL_CAPS",
            Formatter::AllLowercase => "ALL_LOWERCASE",
            Formatter::CapitalizeFirstWord => "CAPITALIZE_FIRST_WORD",
            Formatter::CapitalizeAllWords => "CAPITALIZE_ALL_WORDS",
            Formatter::DoubleQuotedString => "DOUBLE_QUOTED_STRING",
            Formatter::SingleQuotedString => "SINGLE_QUOTED_STRING",
            Formatter::SpaceSurroundedString => "SPACE_SURROUNDED_STRING",
            Formatter::FirstThree => "FIRST_THREE",
            Formatter::FirstFour => "FIRST_FOUR",
            Formatter::FirstFive => "FIRST_FIVE",
        }
    }

    /// The word a speaker says to pick this formatter
    pub fn spoken(self) -> &'static str {
        match self {
            Formatter::DoubleUnderscore => "dunder",
            Formatter::PrivateCamelCase => "camel",
            Formatter::PublicCamelCase => "hammer",
            Formatter::SnakeCase => "snake",
            Formatter::NoSpaces => "smash",
            Formatter::DashSeparated => "kebab",
            Formatter::DoubleColonSeparated => "packed",
            Formatter::DotSeparated => "dotted",
            Formatter::SlashSeparated => "slasher",
            Formatter::AllCaps => "allcaps",
            Formatter::AllLowercase => "alldown",
            Formatter::CapitalizeFirstWord => "sentence",
            Formatter::CapitalizeAllWords => "title",
            Formatter::DoubleQuotedString => "dubstring",
            Formatter::SingleQuotedString => "string",
            Formatter::SpaceSurroundedString => "padded",
            Formatter::FirstThree => "tree",
            Formatter::FirstFour => "quad",
            Formatter::FirstFive => "fiver",
        }
    }

    /// Whether words may remain space-separated after this formatter runs
    pub fn spacing(self) -> Spacing {
        match self {
            Formatter::AllCaps
            | Formatter::AllLowercase
            | Formatter::CapitalizeFirstWord
            | Formatter::CapitalizeAllWords
            | Formatter::DoubleQuotedString
            | Formatter::SingleQuotedString
            | Formatter::SpaceSurroundedString => Spacing::Space,
            _ => Spacing::NoSeparator,
        }
    }

    /// Transform the word at `index`; `is_last` marks the final word of the phrase
    pub fn apply(self, index: usize, word: &str, is_last: bool) -> String {
        let first = index == 0;
        match self {
            Formatter::DoubleUnderscore => surround(word, "__", first, is_last),
            Formatter::PrivateCamelCase => {
                if first {
                    word.to_lowercase()
                } else {
                    capitalize(word)
                }
            }
            Formatter::PublicCamelCase => capitalize(word),
            Formatter::SnakeCase => {
                let word = snake_word(word);
                if first { word } else { format!("_{}", word) }
            }
            Formatter::NoSpaces => word.to_string(),

            Formatter::DashSeparated => join_after_first(word, "-", first),
            Formatter::DoubleColonSeparated => join_after_first(word, "::", first),
            Formatter::DotSeparated => join_after_first(word, ".", first),
            Formatter::SlashSeparated => format!("/{}", word),

            Formatter::AllCaps => word.to_uppercase(),
            Formatter::AllLowercase => word.to_lowercase(),
            Formatter::CapitalizeFirstWord => {
                if first {
                    capitalize(word)
                } else {
                    word.to_string()
                }
            }
            Formatter::CapitalizeAllWords => {
                if first || !is_stop_word(word) {
                    capitalize(word)
                } else {
                    word.to_string()
                }
            }

            Formatter::DoubleQuotedString => surround(word, "\"", first, is_last),
            Formatter::SingleQuotedString => surround(word, "'", first, is_last),
            Formatter::SpaceSurroundedString => surround(word, " ", first, is_last),

            Formatter::FirstThree => truncate(word, 3),
            Formatter::FirstFour => truncate(word, 4),
            Formatter::FirstFive => truncate(word, 5),
        }
    }
}

impl fmt::Display for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Formatter {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self> {
        get(s)
    }
}

/// Look up a formatter by canonical name or spoken alias
pub fn get(name: &str) -> Result<Formatter> {
    Formatter::ALL
        .iter()
        .copied()
        .find(|f| f.name() == name || f.spoken() == name)
        .ok_or_else(|| FormatError::UnknownFormatter(name.to_string()))
}

/// Look up a formatter by its spoken alias only, ignoring case
pub fn from_spoken(word: &str) -> Option<Formatter> {
    let word = word.to_lowercase();
    Formatter::ALL.iter().copied().find(|f| f.spoken() == word)
}

/// Uppercase the first character and lowercase the rest
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Lowercase a word for snake case, keeping words that are already all caps
fn snake_word(word: &str) -> String {
    let has_upper = word.chars().any(char::is_uppercase);
    let has_lower = word.chars().any(char::is_lowercase);
    if has_upper && !has_lower {
        word.to_string()
    } else {
        word.to_lowercase()
    }
}

fn is_stop_word(word: &str) -> bool {
    WORDS_TO_KEEP_LOWERCASE.contains(&word.to_lowercase().as_str())
}

fn surround(word: &str, by: &str, first: bool, last: bool) -> String {
    let mut out = String::with_capacity(word.len() + 2 * by.len());
    if first {
        out.push_str(by);
    }
    out.push_str(word);
    if last {
        out.push_str(by);
    }
    out
}

fn join_after_first(word: &str, joiner: &str, first: bool) -> String {
    if first {
        word.to_string()
    } else {
        format!("{}{}", joiner, word)
    }
}

fn truncate(word: &str, n: usize) -> String {
    word.chars().take(n).collect()
}
