//! Leptos integration.
//!
//! Wires a [`NavContext`] to the browser through `leptos_router`: the URL
//! effect feeds [`SyncEvent::UrlChanged`], user actions go through
//! [`NavigationHandle`], and the guard is lowered on the next tick after
//! every write.
//!
//! ```rust,ignore
//! #[component]
//! fn App() -> impl IntoView {
//!     view! {
//!         <Router>
//!             <NavigationProvider>
//!                 <Storefront/>
//!             </NavigationProvider>
//!         </Router>
//!     }
//! }
//! ```

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;
use tonomi_catalog::{CategoryId, ProductId};
use tonomi_nav::{
    NavConfig, NavContext, NavError, NavigationState, PageKey, Router, SyncEvent, SyncOutcome,
    View,
};
use tonomi_store::BrowserStorage;
use tracing::warn;

use crate::error::AppError;

/// [`Router`] backed by the Leptos location and navigate hooks.
pub struct LeptosRouter {
    pathname: Memo<String>,
    search: Memo<String>,
    navigate: Rc<dyn Fn(&str, NavigateOptions)>,
}

impl LeptosRouter {
    /// Build from the enclosing `<Router>`.
    pub fn from_context() -> Self {
        let location = use_location();
        Self {
            pathname: location.pathname,
            search: location.search,
            navigate: Rc::new(use_navigate()),
        }
    }
}

impl Router for LeptosRouter {
    fn current_query(&self) -> String {
        let search = self.search.get_untracked();
        search.trim_start_matches('?').to_string()
    }

    fn replace(&mut self, query: &str) -> Result<(), NavError> {
        let path = self
            .pathname
            .try_get_untracked()
            .ok_or(NavError::RouterUnavailable)?;
        let url = if query.is_empty() {
            path
        } else {
            format!("{path}?{query}")
        };
        (self.navigate)(
            &url,
            NavigateOptions {
                replace: true,
                scroll: false,
                ..Default::default()
            },
        );
        Ok(())
    }
}

/// Shared handle to the navigation context of the mounted app.
#[derive(Clone, Copy)]
pub struct NavigationHandle {
    ctx: StoredValue<NavContext<LeptosRouter>, LocalStorage>,
    revision: RwSignal<u64>,
}

impl NavigationHandle {
    /// Current state. Tracks, so views re-render on navigation.
    pub fn state(&self) -> NavigationState {
        self.revision.track();
        self.ctx.with_value(|ctx| ctx.store().snapshot().clone())
    }

    /// Go to a page.
    pub fn navigate(&self, page: impl Into<PageKey>) {
        let page = page.into();
        self.run(move |ctx| ctx.navigate(page));
    }

    /// Open a product detail page.
    pub fn open_product(&self, id: impl Into<ProductId>) {
        let id = id.into();
        self.run(move |ctx| ctx.open_product(id));
    }

    /// Open the catalog filtered by a category.
    pub fn open_category(&self, id: Option<CategoryId>) {
        self.run(move |ctx| ctx.open_category(id));
    }

    /// Change the selected category without leaving the page.
    pub fn select_category(&self, id: Option<CategoryId>) {
        self.run(move |ctx| ctx.select_category(id));
    }

    /// Switch between storefront and back-office.
    pub fn set_current_view(&self, view: View) {
        self.run(move |ctx| ctx.set_current_view(view));
    }

    fn dispatch(&self, event: SyncEvent) {
        self.run(move |ctx| ctx.dispatch(event));
    }

    fn run(&self, action: impl FnOnce(&mut NavContext<LeptosRouter>) -> Vec<SyncOutcome>) {
        let mut outcomes = Vec::new();
        let mut revision = 0;
        self.ctx.update_value(|ctx| {
            outcomes = action(ctx);
            revision = ctx.store().revision();
        });

        if revision != self.revision.get_untracked() {
            self.revision.set(revision);
        }

        if outcomes
            .iter()
            .any(|o| matches!(o, SyncOutcome::Replaced(_)))
        {
            let handle = *self;
            spawn_local(async move {
                handle.ctx.update_value(|ctx| {
                    ctx.tick();
                });
            });
        }
    }
}

/// Create the navigation context for the enclosing `<Router>` and provide it.
pub fn provide_navigation(config: NavConfig) -> NavigationHandle {
    let router = LeptosRouter::from_context();
    let search = router.search;
    let handle = NavigationHandle {
        ctx: StoredValue::new_local(NavContext::new(config, router)),
        revision: RwSignal::new(0),
    };

    // Runs once on mount and again on every query-string change.
    Effect::new(move |_| {
        search.track();
        handle.dispatch(SyncEvent::UrlChanged);
    });

    provide_context(handle);
    handle
}

/// Navigation handle provided by [`provide_navigation`].
pub fn use_navigation() -> NavigationHandle {
    expect_context::<NavigationHandle>()
}

/// Provides navigation to its children. Must sit inside `<Router>`.
#[component]
pub fn NavigationProvider(
    #[prop(optional)] config: Option<NavConfig>,
    children: Children,
) -> impl IntoView {
    provide_navigation(config.unwrap_or_default());
    children()
}

/// Open `localStorage` for the storefront's shopper state.
///
/// ```rust,ignore
/// let app = Storefront::new(
///     StorefrontConfig::default(),
///     Catalog::seeded(),
///     LeptosRouter::from_context(),
///     open_browser_storage()?,
/// );
/// ```
pub fn open_browser_storage() -> Result<BrowserStorage, AppError> {
    BrowserStorage::open().map_err(|err| {
        warn!(error = %err, "browser storage unavailable");
        AppError::from(err)
    })
}
