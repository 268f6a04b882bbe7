//! Error types for navigation.
//!
//! Decoding and store mutations never fail; only the router seam and
//! configuration loading report errors.

use thiserror::Error;

/// Errors that can occur while talking to the router or loading config.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    /// No router is mounted (e.g. outside a browser).
    #[error("Router unavailable")]
    RouterUnavailable,

    /// The history API refused the replace.
    #[error("URL replace failed: {0}")]
    ReplaceFailed(String),

    /// Configuration could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for NavError {
    fn from(err: toml::de::Error) -> Self {
        NavError::Config(err.to_string())
    }
}
