//! Navigation configuration.

use serde::{Deserialize, Serialize};
use tonomi_catalog::{CategoryId, PROMOTIONS_CATEGORY_ID};

use crate::error::NavError;
use crate::page::{AdminPage, StorePage};

/// Configuration for navigation and URL synchronization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Category forced on the selection when the promotions page opens.
    pub promotions_category: CategoryId,
    /// Store page used when the query names no recognized page.
    pub default_store_page: StorePage,
    /// Admin page used when `view=admin` names no recognized admin page.
    pub default_admin_page: AdminPage,
    /// Whether router failures are logged.
    pub dev_logging: bool,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            promotions_category: CategoryId::new(PROMOTIONS_CATEGORY_ID),
            default_store_page: StorePage::Home,
            default_admin_page: AdminPage::Dashboard,
            dev_logging: cfg!(debug_assertions),
        }
    }
}

impl NavConfig {
    /// Parse configuration from a TOML document. Missing keys keep defaults.
    ///
    /// ```rust
    /// use tonomi_nav::{AdminPage, NavConfig};
    ///
    /// let config = NavConfig::from_toml_str(r#"default_admin_page = "orders""#).unwrap();
    /// assert_eq!(config.default_admin_page, AdminPage::Orders);
    /// ```
    pub fn from_toml_str(s: &str) -> Result<Self, NavError> {
        Ok(toml::from_str(s)?)
    }

    /// Set the promotions category.
    pub fn with_promotions_category(mut self, id: impl Into<CategoryId>) -> Self {
        self.promotions_category = id.into();
        self
    }

    /// Set the fallback store page.
    pub fn with_default_store_page(mut self, page: StorePage) -> Self {
        self.default_store_page = page;
        self
    }

    /// Set the fallback admin page.
    pub fn with_default_admin_page(mut self, page: AdminPage) -> Self {
        self.default_admin_page = page;
        self
    }

    /// Enable or disable logging of router failures.
    pub fn with_dev_logging(mut self, enabled: bool) -> Self {
        self.dev_logging = enabled;
        self
    }
}
