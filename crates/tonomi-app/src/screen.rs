//! Choosing what to render for a navigation state.
//!
//! This is where unknown page keys and dangling selections fall back to a
//! safe default, and where admin screens are gated on the session.

use tonomi_catalog::{Catalog, Category, Product};
use tonomi_nav::{AdminPage, NavigationState, PageKey, StorePage, View};

use crate::session::Session;

/// A screen ready to render.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen<'a> {
    Home,
    Catalog {
        category: Option<&'a Category>,
        products: Vec<&'a Product>,
    },
    ProductDetail(&'a Product),
    Promotions {
        category: Option<&'a Category>,
        products: Vec<&'a Product>,
    },
    Cart,
    Checkout,
    Account,
    Wishlist,
    Admin(AdminPage),
    /// Admin screen requested without admin rights.
    AccessDenied,
}

impl Screen<'_> {
    /// Document title.
    pub fn title(&self, site: &str) -> String {
        let page = match self {
            Screen::Home => return site.to_string(),
            Screen::Catalog {
                category: Some(c), ..
            } => c.name.as_str(),
            Screen::Catalog { .. } => "Catalog",
            Screen::ProductDetail(p) => p.name.as_str(),
            Screen::Promotions { .. } => "Promotions",
            Screen::Cart => "Cart",
            Screen::Checkout => "Checkout",
            Screen::Account => "Account",
            Screen::Wishlist => "Wishlist",
            Screen::Admin(page) => page.title(),
            Screen::AccessDenied => "Access denied",
        };
        format!("{page} | {site}")
    }

    /// Whether this is a back-office screen, including the denial screen.
    pub fn is_admin(&self) -> bool {
        matches!(self, Screen::Admin(_) | Screen::AccessDenied)
    }
}

/// Resolve the screen for a state. Never fails.
///
/// - admin view or admin page: the admin screen (dashboard for non-admin
///   keys), or [`Screen::AccessDenied`] for non-admin sessions
/// - product page without a known product: the full catalog
/// - unknown keys: home
pub fn resolve_screen<'a>(
    state: &NavigationState,
    catalog: &'a Catalog,
    session: &Session,
) -> Screen<'a> {
    if state.view == View::Admin || state.page.is_admin() {
        if !session.is_admin() {
            return Screen::AccessDenied;
        }
        return match state.page {
            PageKey::Admin(page) => Screen::Admin(page),
            _ => Screen::Admin(AdminPage::Dashboard),
        };
    }

    let page = match &state.page {
        PageKey::Store(page) => *page,
        _ => return Screen::Home,
    };

    match page {
        StorePage::Home => Screen::Home,
        StorePage::Catalog | StorePage::Category => {
            let category = state
                .relevant_category()
                .and_then(|id| catalog.category(id).ok());
            let products = match category {
                Some(c) => catalog.products_in_category(&c.id),
                None => catalog.products().iter().collect(),
            };
            Screen::Catalog { category, products }
        }
        StorePage::Promotions => {
            let category = state
                .relevant_category()
                .and_then(|id| catalog.category(id).ok());
            let products = match category {
                Some(c) => catalog.products_in_category(&c.id),
                None => catalog.promotions(),
            };
            Screen::Promotions { category, products }
        }
        StorePage::Product => match state.relevant_product().map(|id| catalog.product(id)) {
            Some(Ok(product)) => Screen::ProductDetail(product),
            _ => Screen::Catalog {
                category: None,
                products: catalog.products().iter().collect(),
            },
        },
        StorePage::Cart => Screen::Cart,
        StorePage::Checkout => Screen::Checkout,
        StorePage::Account => Screen::Account,
        StorePage::Wishlist => Screen::Wishlist,
    }
}
