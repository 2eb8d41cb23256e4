use crate::dictation::{CommandParser, DEFAULT_TERMINATOR};
use crate::error::Result;
use crate::formatters::{Formatter, resolve_chain};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, PartialEq)]
pub struct Config {
    /// Chain used when no formatter is given on the command line
    #[serde(default)]
    pub default_formatters: Vec<String>,
    #[serde(default)]
    pub dictation: DictationConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_formatters: Vec::new(),
            dictation: DictationConfig::default(),
        }
    }
}

// ============================================================================
// Dictation Config
// ============================================================================

#[derive(Debug, Deserialize, PartialEq)]
pub struct DictationConfig {
    /// Word that ends a dictated phrase
    #[serde(default = "default_terminator")]
    pub terminator: String,

    /// Drop the terminator from the end of a phrase before formatting
    #[serde(default = "default_strip_terminator")]
    pub strip_terminator: bool,

    /// Format clipboard text when a spoken command has no phrase
    #[serde(default = "default_clipboard_fallback")]
    pub clipboard_fallback: bool,
}

impl Default for DictationConfig {
    fn default() -> Self {
        Self {
            terminator: default_terminator(),
            strip_terminator: default_strip_terminator(),
            clipboard_fallback: default_clipboard_fallback(),
        }
    }
}

impl DictationConfig {
    pub fn parser(&self) -> CommandParser {
        CommandParser::new(&self.terminator, self.strip_terminator)
    }
}

fn default_terminator() -> String {
    DEFAULT_TERMINATOR.into()
}

fn default_strip_terminator() -> bool {
    true
}

fn default_clipboard_fallback() -> bool {
    true
}

impl Config {
    /// Load `config.toml` from the working directory
    pub fn load() -> Self {
        Self::load_from(Path::new("config.toml"))
    }

    /// Load a config file, falling back to defaults if it is missing or invalid
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Config::default();
        }

        match fs::read_to_string(path) {
            Ok(s) => Self::parse(&s).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), "invalid config, using defaults: {}", e);
                Config::default()
            }),
            Err(e) => {
                tracing::warn!(path = %path.display(), "failed to read config: {}", e);
                Config::default()
            }
        }
    }

    pub fn parse(s: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Resolve `default_formatters` against the registry
    pub fn validate(&self) -> Result<Vec<Formatter>> {
        resolve_chain(&self.default_formatters)
    }
}
