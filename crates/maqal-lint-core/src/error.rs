//! Error types for maqal-lint-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur when building a custom lexicon.
#[derive(Error, Debug)]
pub enum LexiconError {
    /// A boilerplate template failed to compile as a regex.
    #[error("invalid boilerplate template `{template}`: {source}")]
    InvalidTemplate {
        /// The template string that was rejected.
        template: String,
        /// The underlying regex error.
        source: regex::Error,
    },
}

/// Result type alias using [`LexiconError`].
pub type LexiconResult<T> = Result<T, LexiconError>;
