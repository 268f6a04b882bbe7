//! Mapping between navigation state and the address-bar query.
//!
//! Encoding rules, first match wins:
//!
//! 1. product page: `page=product`, plus `id` when a product is selected
//! 2. catalog, category and promotions: `page=catalog`, plus `category`
//!    when a category is selected
//! 3. cart, checkout, account and wishlist: `page=<page>`
//! 4. home: `page=home`
//! 5. anything else is addressed as admin: `view=admin&page=<admin key>`
//!
//! Empty ids count as no selection in both directions. Query parameters not
//! owned by navigation are carried over unchanged.

use tonomi_catalog::{CategoryId, ProductId};

use crate::config::NavConfig;
use crate::page::{AdminPage, PageKey, StorePage, View};
use crate::query::UrlQuery;
use crate::state::{NavigationPatch, NavigationState};

/// Pure encoder/decoder for navigation state.
#[derive(Debug, Clone)]
pub struct UrlCodec {
    default_store_page: StorePage,
    default_admin_page: AdminPage,
}

impl Default for UrlCodec {
    fn default() -> Self {
        Self::new(&NavConfig::default())
    }
}

impl UrlCodec {
    /// Create a codec using the configured fallback pages.
    pub fn new(config: &NavConfig) -> Self {
        Self {
            default_store_page: config.default_store_page,
            default_admin_page: config.default_admin_page,
        }
    }

    /// Encode a state into a fresh query.
    pub fn encode(&self, state: &NavigationState) -> UrlQuery {
        self.encode_against(state, &UrlQuery::new())
    }

    /// Encode a state on top of the query currently in the address bar.
    ///
    /// Foreign parameters in `current` survive. For admin pages the `page`
    /// value comes from the state if it names an admin page, otherwise from
    /// `current` if that names one, otherwise the default admin page. Store
    /// page keys never end up in an admin URL.
    pub fn encode_against(&self, state: &NavigationState, current: &UrlQuery) -> UrlQuery {
        let mut query = current.without_managed();

        match &state.page {
            PageKey::Store(StorePage::Product) => {
                query.set("page", StorePage::Product.as_str());
                if let Some(id) = state.relevant_product() {
                    query.set("id", id.as_str());
                }
            }
            PageKey::Store(page) if page.is_listing() => {
                query.set("page", StorePage::Catalog.as_str());
                if let Some(id) = state.relevant_category() {
                    query.set("category", id.as_str());
                }
            }
            PageKey::Store(page) if page.is_standalone() => {
                query.set("page", page.as_str());
            }
            PageKey::Store(_) => {
                query.set("page", StorePage::Home.as_str());
            }
            PageKey::Admin(_) | PageKey::Other(_) => {
                let page = self.desired_admin_page(&state.page, current);
                query.set("view", View::Admin.as_str());
                query.set("page", page.as_str());
            }
        }

        query
    }

    /// Decode a query into the changes it asks for.
    ///
    /// Never fails: anything unrecognized lands on the default store page, or
    /// the default admin page under `view=admin`.
    pub fn decode(&self, query: &UrlQuery) -> NavigationPatch {
        if query.get("view") == Some(View::Admin.as_str()) {
            let page = query
                .get("page")
                .and_then(AdminPage::parse)
                .unwrap_or(self.default_admin_page);
            return NavigationPatch {
                view: Some(View::Admin),
                page: Some(page.into()),
                ..Default::default()
            };
        }

        let page = query.get("page").and_then(StorePage::parse);
        let mut patch = NavigationPatch {
            view: Some(View::Store),
            ..Default::default()
        };

        match page {
            Some(StorePage::Product) => {
                patch.page = Some(StorePage::Product.into());
                patch.product = query
                    .get_non_empty("id")
                    .map(|id| Some(ProductId::new(id)));
            }
            Some(StorePage::Catalog | StorePage::Category) => {
                patch.page = Some(StorePage::Catalog.into());
                patch.category = Some(query.get_non_empty("category").map(CategoryId::new));
            }
            Some(StorePage::Promotions) => {
                patch.page = Some(StorePage::Promotions.into());
            }
            Some(page) if page.is_standalone() => {
                patch.page = Some(page.into());
            }
            _ => {
                patch.page = Some(self.default_store_page.into());
            }
        }

        patch
    }

    fn desired_admin_page(&self, page: &PageKey, current: &UrlQuery) -> AdminPage {
        if let PageKey::Admin(page) = page {
            return *page;
        }
        current
            .get("page")
            .and_then(AdminPage::parse)
            .unwrap_or(self.default_admin_page)
    }
}
