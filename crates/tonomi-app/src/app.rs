//! Storefront configuration and application root.

use serde::{Deserialize, Serialize};
use tonomi_catalog::{Catalog, CategoryId, ProductId};
use tonomi_nav::{NavConfig, NavContext, PageKey, Router, SyncOutcome, View};
use tonomi_store::{Cart, KvStore, Storage, Wishlist};
use tracing::info;

use crate::error::AppError;
use crate::screen::{resolve_screen, Screen};
use crate::session::Session;

/// Configuration for a Tonomi storefront.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Application name.
    pub name: String,
    /// Site name used in document titles.
    pub default_title: String,
    /// Prefix for every browser-storage key.
    pub storage_namespace: String,
    /// Navigation settings.
    pub nav: NavConfig,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            name: "tonomi".to_string(),
            default_title: "Tonomi".to_string(),
            storage_namespace: "tonomi".to_string(),
            nav: NavConfig::default(),
        }
    }
}

impl StorefrontConfig {
    /// Create a new configuration with the given app name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Parse configuration from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(s)?)
    }

    /// Set the site name used in titles.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.default_title = title.into();
        self
    }

    /// Set the storage namespace.
    pub fn with_storage_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.storage_namespace = namespace.into();
        self
    }

    /// Set the navigation configuration.
    pub fn with_nav(mut self, nav: NavConfig) -> Self {
        self.nav = nav;
        self
    }
}

/// Root of a running storefront: catalog, navigation and shopper state.
///
/// # Example
///
/// ```rust
/// use tonomi_app::{Screen, Storefront, StorefrontConfig};
/// use tonomi_catalog::Catalog;
/// use tonomi_nav::MemoryRouter;
/// use tonomi_store::MemoryStorage;
///
/// let mut app = Storefront::new(
///     StorefrontConfig::default(),
///     Catalog::seeded(),
///     MemoryRouter::with_query("?page=product&id=prod-1"),
///     MemoryStorage::new(),
/// );
/// app.mount();
/// assert!(matches!(app.screen(), Screen::ProductDetail(_)));
/// ```
#[derive(Debug)]
pub struct Storefront<R, S> {
    config: StorefrontConfig,
    catalog: Catalog,
    nav: NavContext<R>,
    kv: KvStore<S>,
    cart: Cart,
    wishlist: Wishlist,
    session: Session,
}

impl<R: Router, S: Storage> Storefront<R, S> {
    /// Create an unmounted storefront with a guest session and empty cart.
    pub fn new(config: StorefrontConfig, catalog: Catalog, router: R, storage: S) -> Self {
        let kv = KvStore::new(storage, config.storage_namespace.clone());
        Self {
            nav: NavContext::new(config.nav.clone(), router),
            catalog,
            kv,
            cart: Cart::new(),
            wishlist: Wishlist::new(),
            session: Session::guest(),
            config,
        }
    }

    /// Restore shopper state and derive navigation from the loaded URL.
    pub fn mount(&mut self) -> Vec<SyncOutcome> {
        self.cart = Cart::load(&self.kv);
        self.wishlist = Wishlist::load(&self.kv);
        let outcomes = self.nav.mount();
        info!(
            app = %self.config.name,
            page = %self.nav.store().page(),
            cart_items = self.cart.item_count(),
            "storefront mounted"
        );
        outcomes
    }

    /// Screen for the current navigation state.
    pub fn screen(&self) -> Screen<'_> {
        resolve_screen(self.nav.store().snapshot(), &self.catalog, &self.session)
    }

    /// Document title for the current screen.
    pub fn title(&self) -> String {
        self.screen().title(&self.config.default_title)
    }

    /// Go to a page.
    pub fn navigate(&mut self, page: impl Into<PageKey>) -> Vec<SyncOutcome> {
        self.nav.navigate(page)
    }

    /// Open a product detail page.
    pub fn open_product(&mut self, id: impl Into<ProductId>) -> Vec<SyncOutcome> {
        self.nav.open_product(id)
    }

    /// Open the catalog filtered by a category, or unfiltered.
    pub fn open_category(&mut self, id: Option<CategoryId>) -> Vec<SyncOutcome> {
        self.nav.open_category(id)
    }

    /// Switch to the admin back-office.
    pub fn open_admin(&mut self) -> Vec<SyncOutcome> {
        let mut outcomes = self.nav.set_current_view(View::Admin);
        outcomes.extend(self.nav.navigate(self.config.nav.default_admin_page));
        outcomes
    }

    /// Add a catalog product to the cart and persist it.
    pub fn add_to_cart(&mut self, id: &ProductId, quantity: u32) -> Result<(), AppError> {
        let product = self.catalog.product(id)?;
        self.cart.add(product, quantity)?;
        self.cart.save(&mut self.kv)?;
        Ok(())
    }

    /// Change a cart line and persist it. Zero removes the line.
    ///
    /// Returns false, and writes nothing, when the line is not in the cart.
    pub fn update_cart(&mut self, id: &ProductId, quantity: u32) -> Result<bool, AppError> {
        if !self.cart.set_quantity(id, quantity)? {
            return Ok(false);
        }
        self.cart.save(&mut self.kv)?;
        Ok(true)
    }

    /// Save or unsave a catalog product. Returns whether it is now saved.
    pub fn toggle_wishlist(&mut self, id: &ProductId) -> Result<bool, AppError> {
        self.catalog.product(id)?;
        let saved = self.wishlist.toggle(id);
        self.wishlist.save(&mut self.kv)?;
        Ok(saved)
    }

    /// Replace the current session.
    pub fn sign_in(&mut self, session: Session) {
        self.session = session;
    }

    /// Drop back to a guest session.
    pub fn sign_out(&mut self) {
        self.session = Session::guest();
    }

    /// Storefront configuration.
    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Catalog service.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Navigation context.
    pub fn nav(&self) -> &NavContext<R> {
        &self.nav
    }

    /// Mutable navigation context, e.g. to feed router events.
    pub fn nav_mut(&mut self) -> &mut NavContext<R> {
        &mut self.nav
    }

    /// Current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Current wishlist.
    pub fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    /// Current session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Key-value store holding the shopper state.
    pub fn kv(&self) -> &KvStore<S> {
        &self.kv
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonomi_nav::AdminPage;

    // === StorefrontConfig Tests ===

    #[test]
    fn test_storefront_config_default() {
        let config = StorefrontConfig::default();

        assert_eq!(config.name, "tonomi");
        assert_eq!(config.default_title, "Tonomi");
        assert_eq!(config.storage_namespace, "tonomi");
        assert_eq!(config.nav, NavConfig::default());
    }

    #[test]
    fn test_storefront_config_builder_chain() {
        let config = StorefrontConfig::new("shop")
            .with_title("My Shop")
            .with_storage_namespace("shop-v2")
            .with_nav(NavConfig::default().with_default_admin_page(AdminPage::Orders));

        assert_eq!(config.name, "shop");
        assert_eq!(config.default_title, "My Shop");
        assert_eq!(config.storage_namespace, "shop-v2");
        assert_eq!(config.nav.default_admin_page, AdminPage::Orders);
    }

    #[test]
    fn test_storefront_config_from_toml() {
        let config = StorefrontConfig::from_toml_str(
            r#"
            default_title = "Tonomi Outlet"

            [nav]
            promotions_category = "cat-3"
            "#,
        )
        .unwrap();

        assert_eq!(config.name, "tonomi");
        assert_eq!(config.default_title, "Tonomi Outlet");
        assert_eq!(config.nav.promotions_category.as_str(), "cat-3");
    }

    #[test]
    fn test_storage_errors_surface_as_app_errors() {
        let err = AppError::from(tonomi_store::StoreError::Unavailable);
        assert!(matches!(err, AppError::Store(tonomi_store::StoreError::Unavailable)));
        assert_eq!(err.to_string(), "Storage unavailable");
    }

    #[test]
    fn test_storefront_config_from_bad_toml() {
        let err = StorefrontConfig::from_toml_str("name = [").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
