//! Address-bar synchronization.
//!
//! The [`Synchronizer`] is a small state machine between the
//! [`NavigationStore`] and a [`Router`]:
//!
//! ```text
//!            UrlChanged (not our own write)
//!   Idle ─────────────────────────────────► ApplyingUrlChange ──► Idle
//!     │
//!     │      StateChanged (encoded query differs from the URL)
//!     └───────────────────────────────────► ApplyingStateChange ─► Idle
//!                                              sets guard, replace()
//!   Tick: clears the guard
//! ```
//!
//! While the guard is up, URL changes are ignored: a write made by the
//! synchronizer is never read back as external navigation. The last written
//! query is also remembered until its echo arrives, so an echo landing after
//! the guard has dropped is still recognized. Any later visit to the same
//! query is decoded like any other navigation.

use tracing::{debug, trace, warn};

use crate::codec::UrlCodec;
use crate::config::NavConfig;
use crate::query::UrlQuery;
use crate::router::Router;
use crate::state::{NavigationPatch, NavigationStore};

/// Phase of the synchronizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncPhase {
    #[default]
    Idle,
    ApplyingUrlChange,
    ApplyingStateChange,
}

/// Input to the synchronizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncEvent {
    /// The router's query string changed.
    UrlChanged,
    /// The navigation store changed.
    StateChanged,
    /// The write that raised the guard has settled.
    Tick,
}

/// Why a URL change was not decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The reentrancy guard is up.
    Guarded,
    /// The URL is the query this synchronizer last wrote.
    OwnWrite,
}

/// Result of handling one [`SyncEvent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The URL was decoded and applied to the store.
    Applied(NavigationPatch),
    /// The URL change was not decoded.
    Ignored(IgnoreReason),
    /// The URL was replaced with this canonical query.
    Replaced(String),
    /// The URL already matched the state.
    Unchanged,
    /// The router refused the write; the store is unaffected.
    ReplaceFailed,
    /// The guard was lowered (or was already down).
    GuardCleared,
}

/// Keeps the navigation store and the address bar in step.
#[derive(Debug, Clone)]
pub struct Synchronizer {
    codec: UrlCodec,
    phase: SyncPhase,
    guard: bool,
    last_written: Option<String>,
    dev_logging: bool,
}

impl Synchronizer {
    /// Create an idle synchronizer with the guard down.
    pub fn new(config: &NavConfig) -> Self {
        Self {
            codec: UrlCodec::new(config),
            phase: SyncPhase::Idle,
            guard: false,
            last_written: None,
            dev_logging: config.dev_logging,
        }
    }

    /// Current phase. `Idle` whenever no event is being handled.
    pub fn phase(&self) -> SyncPhase {
        self.phase
    }

    /// Whether the guard is up, i.e. a [`SyncEvent::Tick`] is pending.
    pub fn is_guarded(&self) -> bool {
        self.guard
    }

    /// Codec used for both directions.
    pub fn codec(&self) -> &UrlCodec {
        &self.codec
    }

    /// Handle one event.
    pub fn handle<R: Router + ?Sized>(
        &mut self,
        event: SyncEvent,
        store: &mut NavigationStore,
        router: &mut R,
    ) -> SyncOutcome {
        match event {
            SyncEvent::UrlChanged => self.on_url_changed(store, router),
            SyncEvent::StateChanged => self.on_state_changed(store, router),
            SyncEvent::Tick => self.tick(),
        }
    }

    /// Decode the router's current query into the store.
    pub fn on_url_changed<R: Router + ?Sized>(
        &mut self,
        store: &mut NavigationStore,
        router: &R,
    ) -> SyncOutcome {
        let query = UrlQuery::parse(&router.current_query());
        let canonical = query.to_canonical_string();

        // The echo of a write is consumed once, guarded or not.
        let own_write = self.last_written.as_deref() == Some(canonical.as_str());
        if own_write {
            self.last_written = None;
        }
        if self.guard {
            trace!(query = %canonical, "url change while guarded, ignoring");
            return SyncOutcome::Ignored(IgnoreReason::Guarded);
        }
        if own_write {
            trace!(query = %canonical, "url change is our own write, ignoring");
            return SyncOutcome::Ignored(IgnoreReason::OwnWrite);
        }

        self.phase = SyncPhase::ApplyingUrlChange;
        self.last_written = None;
        let patch = self.codec.decode(&query);
        debug!(query = %canonical, ?patch, "applying url change");
        store.apply(patch.clone());
        self.phase = SyncPhase::Idle;

        SyncOutcome::Applied(patch)
    }

    /// Write the store's state to the router if it differs from the URL.
    pub fn on_state_changed<R: Router + ?Sized>(
        &mut self,
        store: &NavigationStore,
        router: &mut R,
    ) -> SyncOutcome {
        self.phase = SyncPhase::ApplyingStateChange;
        let current = UrlQuery::parse(&router.current_query());
        let next = self.codec.encode_against(store.snapshot(), &current);
        let outcome = if next.is_equivalent(&current) {
            trace!(query = %next, "url already in sync");
            // Whatever the URL shows now, the next visit to it is the user's.
            self.last_written = None;
            SyncOutcome::Unchanged
        } else {
            self.write(router, next.to_canonical_string())
        };
        self.phase = SyncPhase::Idle;

        outcome
    }

    /// Lower the guard. Idempotent.
    pub fn tick(&mut self) -> SyncOutcome {
        if self.guard {
            trace!("clearing sync guard");
        }
        self.guard = false;
        SyncOutcome::GuardCleared
    }

    /// Replace the URL and raise the guard.
    ///
    /// The guard only holds back URL decoding. A second state change while
    /// it is up writes again, so rapid changes coalesce to the latest state
    /// and the address bar never lags behind the store.
    fn write<R: Router + ?Sized>(&mut self, router: &mut R, query: String) -> SyncOutcome {
        self.guard = true;
        match router.replace(&query) {
            Ok(()) => {
                debug!(query = %query, "replaced url");
                self.last_written = Some(query.clone());
                SyncOutcome::Replaced(query)
            }
            Err(err) => {
                // Nothing was written, so no echo will arrive.
                self.guard = false;
                self.last_written = None;
                if self.dev_logging {
                    warn!(error = %err, query = %query, "failed to replace url");
                }
                SyncOutcome::ReplaceFailed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{AdminPage, PageKey, StorePage, View};
    use crate::router::MemoryRouter;

    fn setup(query: &str) -> (Synchronizer, NavigationStore, MemoryRouter) {
        let config = NavConfig::default();
        (
            Synchronizer::new(&config),
            NavigationStore::new(&config),
            MemoryRouter::with_query(query),
        )
    }

    #[test]
    fn test_url_change_applies_patch() {
        let (mut sync, mut store, router) = setup("page=product&id=prod-1");

        let outcome = sync.on_url_changed(&mut store, &router);

        assert!(matches!(outcome, SyncOutcome::Applied(_)));
        assert_eq!(store.page(), &PageKey::Store(StorePage::Product));
        assert_eq!(store.selected_product_id().map(|p| p.as_str()), Some("prod-1"));
        assert_eq!(sync.phase(), SyncPhase::Idle);
    }

    #[test]
    fn test_state_change_writes_once() {
        let (mut sync, mut store, mut router) = setup("");
        store.navigate(StorePage::Cart);

        let first = sync.on_state_changed(&store, &mut router);
        let second = sync.on_state_changed(&store, &mut router);

        assert_eq!(first, SyncOutcome::Replaced("page=cart".to_string()));
        assert_eq!(second, SyncOutcome::Unchanged);
        assert_eq!(router.writes().len(), 1);
    }

    #[test]
    fn test_guard_blocks_echo() {
        let (mut sync, mut store, mut router) = setup("");
        store.navigate(AdminPage::Orders);
        sync.on_state_changed(&store, &mut router);
        assert!(sync.is_guarded());

        let echo = sync.on_url_changed(&mut store, &router);
        assert_eq!(echo, SyncOutcome::Ignored(IgnoreReason::Guarded));
        assert_eq!(store.view(), View::Store);
    }

    #[test]
    fn test_late_echo_after_tick_is_recognized() {
        let (mut sync, mut store, mut router) = setup("");
        store.navigate(StorePage::Wishlist);
        sync.on_state_changed(&store, &mut router);
        sync.tick();

        let echo = sync.on_url_changed(&mut store, &router);
        assert_eq!(echo, SyncOutcome::Ignored(IgnoreReason::OwnWrite));
        assert_eq!(store.page(), &PageKey::Store(StorePage::Wishlist));
    }

    #[test]
    fn test_back_to_last_written_query_is_decoded() {
        let (mut sync, mut store, mut router) = setup("page=home");
        store.navigate(StorePage::Cart);
        sync.on_state_changed(&store, &mut router);
        sync.tick();

        router.push("page=wishlist");
        assert!(matches!(
            sync.on_url_changed(&mut store, &router),
            SyncOutcome::Applied(_)
        ));

        router.back();
        assert!(matches!(
            sync.on_url_changed(&mut store, &router),
            SyncOutcome::Applied(_)
        ));
        assert_eq!(store.page(), &PageKey::Store(StorePage::Cart));
    }

    #[test]
    fn test_echo_is_consumed_once() {
        let (mut sync, mut store, mut router) = setup("");
        store.navigate(StorePage::Cart);
        sync.on_state_changed(&store, &mut router);
        sync.tick();

        assert_eq!(
            sync.on_url_changed(&mut store, &router),
            SyncOutcome::Ignored(IgnoreReason::OwnWrite)
        );
        assert!(matches!(
            sync.on_url_changed(&mut store, &router),
            SyncOutcome::Applied(_)
        ));
    }

    #[test]
    fn test_echo_while_guarded_is_consumed() {
        let (mut sync, mut store, mut router) = setup("page=home");
        store.navigate(StorePage::Cart);
        sync.on_state_changed(&store, &mut router);
        assert_eq!(
            sync.on_url_changed(&mut store, &router),
            SyncOutcome::Ignored(IgnoreReason::Guarded)
        );
        sync.tick();

        // The user follows a link to the same query later on.
        router.push("page=cart");
        assert!(matches!(
            sync.on_url_changed(&mut store, &router),
            SyncOutcome::Applied(_)
        ));
        assert_eq!(store.page(), &PageKey::Store(StorePage::Cart));
    }

    #[test]
    fn test_link_to_last_write_after_failed_replace_is_decoded() {
        let (mut sync, mut store, mut router) = setup("page=home");
        store.navigate(StorePage::Cart);
        sync.on_state_changed(&store, &mut router);
        sync.tick();

        router.set_fail_replace(true);
        store.navigate(StorePage::Checkout);
        assert_eq!(
            sync.on_state_changed(&store, &mut router),
            SyncOutcome::ReplaceFailed
        );

        router.push("page=cart");
        assert!(matches!(
            sync.on_url_changed(&mut store, &router),
            SyncOutcome::Applied(_)
        ));
        assert_eq!(store.page(), &PageKey::Store(StorePage::Cart));
    }

    #[test]
    fn test_link_to_last_write_after_unchanged_is_decoded() {
        let (mut sync, mut store, mut router) = setup("");
        sync.on_state_changed(&store, &mut router);
        sync.tick();
        assert_eq!(router.current_query(), "page=home");

        store.set_current_view(View::Admin);
        assert_eq!(
            sync.on_state_changed(&store, &mut router),
            SyncOutcome::Unchanged
        );

        router.push("page=home");
        assert!(matches!(
            sync.on_url_changed(&mut store, &router),
            SyncOutcome::Applied(_)
        ));
        assert_eq!(store.view(), View::Store);
    }

    #[test]
    fn test_phase_is_idle_after_each_event() {
        let (mut sync, mut store, mut router) = setup("page=product&id=prod-1");
        for event in [SyncEvent::UrlChanged, SyncEvent::StateChanged, SyncEvent::Tick] {
            sync.handle(event, &mut store, &mut router);
            assert_eq!(sync.phase(), SyncPhase::Idle);
        }
    }

    #[test]
    fn test_replace_failure_leaves_state_and_guard() {
        let (mut sync, mut store, mut router) = setup("page=home");
        router.set_fail_replace(true);
        store.navigate(StorePage::Checkout);
        let before = store.snapshot().clone();

        let outcome = sync.on_state_changed(&store, &mut router);

        assert_eq!(outcome, SyncOutcome::ReplaceFailed);
        assert_eq!(store.snapshot(), &before);
        assert!(!sync.is_guarded());
        assert_eq!(router.current_query(), "page=home");
    }

    #[test]
    fn test_tick_is_idempotent() {
        let (mut sync, _, _) = setup("");
        assert_eq!(sync.tick(), SyncOutcome::GuardCleared);
        assert_eq!(sync.tick(), SyncOutcome::GuardCleared);
        assert!(!sync.is_guarded());
    }

    #[test]
    fn test_rapid_state_changes_while_guarded_still_write() {
        let (mut sync, mut store, mut router) = setup("");
        store.navigate(StorePage::Cart);
        sync.on_state_changed(&store, &mut router);
        store.navigate(StorePage::Checkout);
        sync.on_state_changed(&store, &mut router);

        assert_eq!(router.current_query(), "page=checkout");
        assert_eq!(router.writes().len(), 2);
    }

    #[test]
    fn test_handle_dispatches() {
        let (mut sync, mut store, mut router) = setup("page=cart");
        let outcome = sync.handle(SyncEvent::UrlChanged, &mut store, &mut router);
        assert!(matches!(outcome, SyncOutcome::Applied(_)));

        let outcome = sync.handle(SyncEvent::StateChanged, &mut store, &mut router);
        assert_eq!(outcome, SyncOutcome::Unchanged);

        let outcome = sync.handle(SyncEvent::Tick, &mut store, &mut router);
        assert_eq!(outcome, SyncOutcome::GuardCleared);
    }
}
