//! Error types for style resolution and theme loading.

use std::path::PathBuf;

use thiserror::Error;

/// Error returned when a style cannot be built or a theme cannot be loaded.
///
/// Style building has no partial-success mode: a render either gets a
/// complete style object or one of these errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// A prop named a token that its strict theme category does not define.
    #[error("theme token '{value}' does not exist in theme category '{theme_key}'")]
    MissingThemeToken {
        /// The prop value that was looked up.
        value: String,
        /// The theme category it was looked up in.
        theme_key: String,
    },

    /// A theme document could not be parsed.
    #[error("failed to parse {format} theme: {message}")]
    ThemeParse {
        /// Source format ("yaml" or "json").
        format: &'static str,
        message: String,
    },

    /// A theme file could not be read.
    #[error("failed to read theme file '{}': {message}", path.display())]
    Io { path: PathBuf, message: String },

    /// Typed props did not serialize into a props object.
    #[error("props must serialize to an object: {message}")]
    InvalidProps { message: String },
}

impl StyleError {
    /// Returns `true` if this is a missing theme token error.
    pub fn is_missing_token(&self) -> bool {
        matches!(self, StyleError::MissingThemeToken { .. })
    }
}
