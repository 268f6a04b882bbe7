//! Error types for the application root.

use thiserror::Error;
use tonomi_catalog::CatalogError;
use tonomi_store::StoreError;

/// Errors surfaced by storefront actions.
///
/// Navigation itself never produces one of these; only catalog lookups,
/// persistence and configuration do.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::Config(err.to_string())
    }
}
