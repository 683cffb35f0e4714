//! Error types for codelight
//!
//! Highlighting and indentation never fail; these errors come from the
//! layers around them (configuration, grammar files, host collaborators).

use thiserror::Error;

/// Result type alias for codelight operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid pattern for rule `{rule}`: {source}")]
    Pattern {
        rule: String,
        #[source]
        source: regex::Error,
    },

    #[error("rule `{0}` has neither a pattern nor keywords")]
    EmptyRule(String),

    #[error("invalid rule `{rule}`: {reason}")]
    InvalidRule { rule: String, reason: &'static str },

    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    #[error("failed to launch `{tool}`: {source}")]
    BuildTool {
        tool: String,
        #[source]
        source: std::io::Error,
    },
}
