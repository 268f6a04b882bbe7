//! Root navigation context.
//!
//! [`NavContext`] owns the store, the synchronizer and the router for one
//! mounted application. Every mutation goes through [`NavContext::dispatch`],
//! which drains a queue of [`SyncEvent`]s one at a time, so a URL event and a
//! state event are never handled concurrently.

use std::collections::VecDeque;

use tonomi_catalog::{CategoryId, ProductId};

use crate::config::NavConfig;
use crate::page::{PageKey, StorePage, View};
use crate::router::Router;
use crate::state::NavigationStore;
use crate::sync::{SyncEvent, SyncOutcome, Synchronizer};

/// Navigation store, synchronizer and router bundled for one app root.
#[derive(Debug)]
pub struct NavContext<R> {
    config: NavConfig,
    store: NavigationStore,
    sync: Synchronizer,
    router: R,
}

impl<R: Router> NavContext<R> {
    /// Create an unmounted context around a router.
    pub fn new(config: NavConfig, router: R) -> Self {
        Self {
            store: NavigationStore::new(&config),
            sync: Synchronizer::new(&config),
            router,
            config,
        }
    }

    /// Initialize state from the URL the app was loaded with.
    pub fn mount(&mut self) -> Vec<SyncOutcome> {
        self.dispatch(SyncEvent::UrlChanged)
    }

    /// Process an event and whatever it triggers, in order.
    ///
    /// An applied URL change is followed by a state change, which normalizes
    /// a non-canonical URL with one replace and otherwise finds it in sync.
    pub fn dispatch(&mut self, event: SyncEvent) -> Vec<SyncOutcome> {
        let mut queue = VecDeque::from([event]);
        let mut outcomes = Vec::new();

        while let Some(event) = queue.pop_front() {
            let outcome = self.sync.handle(event, &mut self.store, &mut self.router);
            if matches!(outcome, SyncOutcome::Applied(_)) {
                queue.push_back(SyncEvent::StateChanged);
            }
            outcomes.push(outcome);
        }

        outcomes
    }

    /// Tell the context the router's URL changed.
    pub fn url_changed(&mut self) -> Vec<SyncOutcome> {
        self.dispatch(SyncEvent::UrlChanged)
    }

    /// Let the last write settle.
    pub fn tick(&mut self) -> SyncOutcome {
        self.sync.tick()
    }

    /// Go to a page and sync the URL.
    pub fn navigate(&mut self, page: impl Into<PageKey>) -> Vec<SyncOutcome> {
        self.store.navigate(page);
        self.dispatch(SyncEvent::StateChanged)
    }

    /// Select a product and sync the URL.
    pub fn select_product(&mut self, id: impl Into<ProductId>) -> Vec<SyncOutcome> {
        self.store.select_product(id);
        self.dispatch(SyncEvent::StateChanged)
    }

    /// Select or clear a category and sync the URL.
    pub fn select_category(&mut self, id: Option<CategoryId>) -> Vec<SyncOutcome> {
        self.store.select_category(id);
        self.dispatch(SyncEvent::StateChanged)
    }

    /// Switch view and sync the URL.
    pub fn set_current_view(&mut self, view: View) -> Vec<SyncOutcome> {
        self.store.set_current_view(view);
        self.dispatch(SyncEvent::StateChanged)
    }

    /// Select a product and open its page as a single URL write.
    pub fn open_product(&mut self, id: impl Into<ProductId>) -> Vec<SyncOutcome> {
        self.store.select_product(id);
        self.store.navigate(StorePage::Product);
        self.dispatch(SyncEvent::StateChanged)
    }

    /// Select a category and open the catalog as a single URL write.
    pub fn open_category(&mut self, id: Option<CategoryId>) -> Vec<SyncOutcome> {
        self.store.select_category(id);
        self.store.navigate(StorePage::Catalog);
        self.dispatch(SyncEvent::StateChanged)
    }

    /// Navigation store.
    pub fn store(&self) -> &NavigationStore {
        &self.store
    }

    /// Synchronizer, for inspecting phase and guard.
    pub fn synchronizer(&self) -> &Synchronizer {
        &self.sync
    }

    /// The router.
    pub fn router(&self) -> &R {
        &self.router
    }

    /// Mutable router access, e.g. to simulate back/forward in tests.
    pub fn router_mut(&mut self) -> &mut R {
        &mut self.router
    }

    /// Navigation configuration.
    pub fn config(&self) -> &NavConfig {
        &self.config
    }
}
