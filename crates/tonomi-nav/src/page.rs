//! Views and page keys.
//!
//! A [`PageKey`] names a logical screen inside the single-page app. It is not
//! a URL path: the address bar only ever carries it as the `page` query value.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level mode of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Customer-facing storefront.
    #[default]
    Store,
    /// Admin back-office.
    Admin,
}

impl View {
    /// Value written to the `view` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Store => "store",
            View::Admin => "admin",
        }
    }

    /// Parse a `view` value. Case-sensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "store" => Some(View::Store),
            "admin" => Some(View::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Storefront screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorePage {
    Home,
    Catalog,
    Product,
    Cart,
    Checkout,
    Account,
    Wishlist,
    Category,
    Promotions,
}

impl StorePage {
    pub const ALL: [StorePage; 9] = [
        StorePage::Home,
        StorePage::Catalog,
        StorePage::Product,
        StorePage::Cart,
        StorePage::Checkout,
        StorePage::Account,
        StorePage::Wishlist,
        StorePage::Category,
        StorePage::Promotions,
    ];

    /// Key written to the `page` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            StorePage::Home => "home",
            StorePage::Catalog => "catalog",
            StorePage::Product => "product",
            StorePage::Cart => "cart",
            StorePage::Checkout => "checkout",
            StorePage::Account => "account",
            StorePage::Wishlist => "wishlist",
            StorePage::Category => "category",
            StorePage::Promotions => "promotions",
        }
    }

    /// Parse a store page key.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == s)
    }

    /// Pages that render a product listing filtered by category.
    pub fn is_listing(&self) -> bool {
        matches!(
            self,
            StorePage::Catalog | StorePage::Category | StorePage::Promotions
        )
    }

    /// Pages addressed by their key alone, with no selection attached.
    pub fn is_standalone(&self) -> bool {
        matches!(
            self,
            StorePage::Cart | StorePage::Checkout | StorePage::Account | StorePage::Wishlist
        )
    }
}

/// Admin back-office screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdminPage {
    Dashboard,
    Products,
    Categories,
    HeroSlides,
    Orders,
    Customers,
    Analytics,
    Promos,
    Reviews,
    Settings,
}

impl AdminPage {
    pub const ALL: [AdminPage; 10] = [
        AdminPage::Dashboard,
        AdminPage::Products,
        AdminPage::Categories,
        AdminPage::HeroSlides,
        AdminPage::Orders,
        AdminPage::Customers,
        AdminPage::Analytics,
        AdminPage::Promos,
        AdminPage::Reviews,
        AdminPage::Settings,
    ];

    /// Key written to the `page` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminPage::Dashboard => "admin-dashboard",
            AdminPage::Products => "admin-products",
            AdminPage::Categories => "admin-categories",
            AdminPage::HeroSlides => "admin-hero-slides",
            AdminPage::Orders => "admin-orders",
            AdminPage::Customers => "admin-customers",
            AdminPage::Analytics => "admin-analytics",
            AdminPage::Promos => "admin-promos",
            AdminPage::Reviews => "admin-reviews",
            AdminPage::Settings => "admin-settings",
        }
    }

    /// Name without the `admin-` prefix.
    pub fn short_name(&self) -> &'static str {
        &self.as_str()["admin-".len()..]
    }

    /// Parse an admin key.
    ///
    /// Accepts the prefixed form (`admin-orders`), the bare form (`orders`)
    /// and the camel-cased `heroSlides`.
    pub fn parse(s: &str) -> Option<Self> {
        let bare = s.strip_prefix("admin-").unwrap_or(s);
        let bare = if bare == "heroSlides" { "hero-slides" } else { bare };
        Self::ALL.into_iter().find(|p| p.short_name() == bare)
    }

    /// Human-readable page title.
    pub fn title(&self) -> &'static str {
        match self {
            AdminPage::Dashboard => "Dashboard",
            AdminPage::Products => "Products",
            AdminPage::Categories => "Categories",
            AdminPage::HeroSlides => "Hero Slides",
            AdminPage::Orders => "Orders",
            AdminPage::Customers => "Customers",
            AdminPage::Analytics => "Analytics",
            AdminPage::Promos => "Promo Codes",
            AdminPage::Reviews => "Reviews",
            AdminPage::Settings => "Settings",
        }
    }
}

/// Identifier of a logical screen.
///
/// Unrecognized keys are kept verbatim in [`PageKey::Other`]; deciding what
/// to show for them is the rendering layer's job.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PageKey {
    Store(StorePage),
    Admin(AdminPage),
    Other(String),
}

impl PageKey {
    /// Parse any key. Never fails: unknown keys become [`PageKey::Other`].
    pub fn parse(s: &str) -> Self {
        if let Some(page) = StorePage::parse(s) {
            return PageKey::Store(page);
        }
        match AdminPage::parse(s) {
            Some(page) => PageKey::Admin(page),
            None => PageKey::Other(s.to_string()),
        }
    }

    /// The key as it appears in the `page` parameter.
    pub fn as_str(&self) -> &str {
        match self {
            PageKey::Store(p) => p.as_str(),
            PageKey::Admin(p) => p.as_str(),
            PageKey::Other(s) => s,
        }
    }

    /// Whether this names an admin page.
    pub fn is_admin(&self) -> bool {
        matches!(self, PageKey::Admin(_))
    }

    /// The page this key lands on once it has been through the address bar.
    ///
    /// Category and promotions listings are both addressed as `catalog`.
    pub fn canonical(&self) -> PageKey {
        match self {
            PageKey::Store(p) if p.is_listing() => PageKey::Store(StorePage::Catalog),
            other => other.clone(),
        }
    }
}

impl Default for PageKey {
    fn default() -> Self {
        PageKey::Store(StorePage::Home)
    }
}

impl From<StorePage> for PageKey {
    fn from(page: StorePage) -> Self {
        PageKey::Store(page)
    }
}

impl From<AdminPage> for PageKey {
    fn from(page: AdminPage) -> Self {
        PageKey::Admin(page)
    }
}

impl From<&str> for PageKey {
    fn from(s: &str) -> Self {
        PageKey::parse(s)
    }
}

impl fmt::Display for PageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
