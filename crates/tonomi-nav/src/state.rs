//! Navigation state and its store.

use tonomi_catalog::{CategoryId, ProductId};

use crate::config::NavConfig;
use crate::page::{PageKey, StorePage, View};

/// What the user is looking at.
///
/// `selected_product_id` only means something on the product page and
/// `selected_category_id` only on listing pages; elsewhere they are kept but
/// inert.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub view: View,
    pub page: PageKey,
    pub selected_product_id: Option<ProductId>,
    pub selected_category_id: Option<CategoryId>,
}

impl NavigationState {
    /// Selected product, if the current page uses it. An empty id counts as
    /// no selection.
    pub fn relevant_product(&self) -> Option<&ProductId> {
        match self.page {
            PageKey::Store(StorePage::Product) => self
                .selected_product_id
                .as_ref()
                .filter(|id| !id.as_str().is_empty()),
            _ => None,
        }
    }

    /// Selected category, if the current page uses it. An empty id counts as
    /// no selection.
    pub fn relevant_category(&self) -> Option<&CategoryId> {
        match self.page {
            PageKey::Store(p) if p.is_listing() => self
                .selected_category_id
                .as_ref()
                .filter(|id| !id.as_str().is_empty()),
            _ => None,
        }
    }

    /// View implied by the page when it is written to the address bar.
    ///
    /// Anything that is not a storefront page is addressed as admin.
    pub fn address_view(&self) -> View {
        match self.page {
            PageKey::Store(_) => View::Store,
            _ => View::Admin,
        }
    }

    /// Whether two states address the same screen with the same selection.
    pub fn is_equivalent(&self, other: &NavigationState) -> bool {
        self.address_view() == other.address_view()
            && self.page.canonical() == other.page.canonical()
            && self.relevant_product() == other.relevant_product()
            && self.relevant_category() == other.relevant_category()
    }
}

/// Partial state produced by decoding a URL.
///
/// `None` leaves a field untouched. For the selections, `Some(None)` clears
/// and `Some(Some(id))` selects.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationPatch {
    pub view: Option<View>,
    pub page: Option<PageKey>,
    pub product: Option<Option<ProductId>>,
    pub category: Option<Option<CategoryId>>,
}

impl NavigationPatch {
    /// Whether applying this patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.view.is_none()
            && self.page.is_none()
            && self.product.is_none()
            && self.category.is_none()
    }
}

/// Owner of the current [`NavigationState`].
///
/// Constructed by the application root and handed to whoever needs it. The
/// store accepts every input; a revision counter bumps on each change that
/// actually alters the state.
#[derive(Debug, Clone)]
pub struct NavigationStore {
    state: NavigationState,
    promotions_category: CategoryId,
    revision: u64,
}

impl NavigationStore {
    /// Create a store with default state (storefront home).
    pub fn new(config: &NavConfig) -> Self {
        Self {
            state: NavigationState::default(),
            promotions_category: config.promotions_category.clone(),
            revision: 0,
        }
    }

    /// Go to a page. Selections are left in place.
    ///
    /// Opening the promotions page always selects the promotions category.
    pub fn navigate(&mut self, page: impl Into<PageKey>) {
        let mut next = self.state.clone();
        self.enter(&mut next, page.into());
        self.commit(next);
    }

    /// Select a product. The page is left as it is.
    pub fn select_product(&mut self, id: impl Into<ProductId>) {
        let mut next = self.state.clone();
        next.selected_product_id = Some(id.into());
        self.commit(next);
    }

    /// Select a category, or clear the selection with `None`.
    pub fn select_category(&mut self, id: Option<CategoryId>) {
        let mut next = self.state.clone();
        next.selected_category_id = id;
        self.commit(next);
    }

    /// Switch between storefront and back-office.
    pub fn set_current_view(&mut self, view: View) {
        let mut next = self.state.clone();
        next.view = view;
        self.commit(next);
    }

    /// Apply a decoded patch as one change.
    pub fn apply(&mut self, patch: NavigationPatch) {
        let mut next = self.state.clone();
        if let Some(view) = patch.view {
            next.view = view;
        }
        if let Some(product) = patch.product {
            next.selected_product_id = product;
        }
        if let Some(category) = patch.category {
            next.selected_category_id = category;
        }
        if let Some(page) = patch.page {
            self.enter(&mut next, page);
        }
        self.commit(next);
    }

    /// Current view.
    pub fn view(&self) -> View {
        self.state.view
    }

    /// Current page key.
    pub fn page(&self) -> &PageKey {
        &self.state.page
    }

    /// Selected product, relevant to the current page or not.
    pub fn selected_product_id(&self) -> Option<&ProductId> {
        self.state.selected_product_id.as_ref()
    }

    /// Selected category, relevant to the current page or not.
    pub fn selected_category_id(&self) -> Option<&CategoryId> {
        self.state.selected_category_id.as_ref()
    }

    /// The whole current state.
    pub fn snapshot(&self) -> &NavigationState {
        &self.state
    }

    /// Number of changes applied so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn enter(&self, next: &mut NavigationState, page: PageKey) {
        if page == PageKey::Store(StorePage::Promotions) {
            next.selected_category_id = Some(self.promotions_category.clone());
        }
        next.page = page;
    }

    fn commit(&mut self, next: NavigationState) {
        if next != self.state {
            self.state = next;
            self.revision += 1;
        }
    }
}
