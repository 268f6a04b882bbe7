//! End-to-end behavior of the navigation store, codec and synchronizer.

use proptest::prelude::*;
use tonomi_catalog::{CategoryId, ProductId};
use tonomi_nav::prelude::*;

fn codec() -> UrlCodec {
    UrlCodec::new(&NavConfig::default())
}

fn decode_into_fresh_store(raw: &str) -> NavigationStore {
    let mut store = NavigationStore::new(&NavConfig::default());
    store.apply(codec().decode(&UrlQuery::parse(raw)));
    store
}

// === Scenarios ===

#[test]
fn product_state_encodes_to_product_query() {
    let state = NavigationState {
        view: View::Store,
        page: StorePage::Product.into(),
        selected_product_id: Some(ProductId::new("prod-1")),
        selected_category_id: None,
    };

    let query = codec().encode(&state);

    assert!(query.is_equivalent(&UrlQuery::parse("page=product&id=prod-1")));
}

#[test]
fn catalog_query_decodes_category() {
    let store = decode_into_fresh_store("page=catalog&category=cat-6");

    assert_eq!(store.page(), &PageKey::Store(StorePage::Catalog));
    assert_eq!(store.selected_category_id(), Some(&CategoryId::new("cat-6")));
}

#[test]
fn admin_query_decodes_admin_page() {
    let store = decode_into_fresh_store("view=admin&page=admin-orders");

    assert_eq!(store.view(), View::Admin);
    assert_eq!(store.page().as_str(), "admin-orders");
}

#[test]
fn unknown_admin_page_falls_back_to_dashboard() {
    let store = decode_into_fresh_store("view=admin&page=unknown-key");

    assert_eq!(store.view(), View::Admin);
    assert_eq!(store.page(), &PageKey::Admin(AdminPage::Dashboard));
}

#[test]
fn promotions_always_selects_promotions_category() {
    let config = NavConfig::default();
    let mut store = NavigationStore::new(&config);

    for prior in [None, Some(CategoryId::new("cat-1")), Some(CategoryId::new("cat-6"))] {
        store.select_category(prior);
        store.navigate(StorePage::Home);
        store.navigate(StorePage::Promotions);
        assert_eq!(
            store.selected_category_id(),
            Some(&config.promotions_category)
        );
    }
}

#[test]
fn empty_product_id_round_trips_as_no_selection() {
    let mut store = NavigationStore::new(&NavConfig::default());
    store.select_product("");
    store.navigate(StorePage::Product);

    let encoded = codec().encode(store.snapshot());
    assert_eq!(encoded.to_canonical_string(), "page=product");

    let restored = decode_into_fresh_store(&encoded.to_canonical_string());
    assert!(restored.snapshot().is_equivalent(store.snapshot()));
    assert_eq!(codec().encode(restored.snapshot()), encoded);
}

// === Synchronizer ===

#[test]
fn repeated_state_step_writes_once() {
    let mut nav = NavContext::new(NavConfig::default(), MemoryRouter::with_query("page=home"));
    nav.mount();
    nav.navigate(StorePage::Account);
    let writes = nav.router().writes().len();

    nav.dispatch(SyncEvent::StateChanged);
    nav.dispatch(SyncEvent::StateChanged);

    assert_eq!(writes, 1);
    assert_eq!(nav.router().writes().len(), 1);
}

#[test]
fn external_navigation_does_not_oscillate() {
    let mut nav = NavContext::new(NavConfig::default(), MemoryRouter::with_query("page=home"));
    nav.mount();

    nav.router_mut().push("?page=catalog&category=cat-2&utm_campaign=spring");
    nav.url_changed();
    nav.tick();
    nav.url_changed();

    assert!(nav.router().writes().is_empty());
    assert_eq!(nav.store().selected_category_id(), Some(&CategoryId::new("cat-2")));
}

#[test]
fn back_and_forward_restore_state() {
    let mut nav = NavContext::new(NavConfig::default(), MemoryRouter::with_query("page=home"));
    nav.mount();

    nav.router_mut().push("page=product&id=prod-3");
    nav.url_changed();
    nav.router_mut().push("view=admin&page=admin-reviews");
    nav.url_changed();
    assert_eq!(nav.store().view(), View::Admin);

    nav.router_mut().back();
    nav.url_changed();
    assert_eq!(nav.store().view(), View::Store);
    assert_eq!(nav.store().snapshot().relevant_product(), Some(&ProductId::new("prod-3")));

    nav.router_mut().forward();
    nav.url_changed();
    assert_eq!(nav.store().page(), &PageKey::Admin(AdminPage::Reviews));
    assert!(nav.router().writes().is_empty());
}

#[test]
fn failed_replace_keeps_in_memory_state() {
    let mut router = MemoryRouter::with_query("page=home");
    router.set_fail_replace(true);
    let mut nav = NavContext::new(NavConfig::default().with_dev_logging(true), router);
    nav.mount();

    let outcomes = nav.navigate(StorePage::Wishlist);

    assert_eq!(outcomes, vec![SyncOutcome::ReplaceFailed]);
    assert_eq!(nav.store().page(), &PageKey::Store(StorePage::Wishlist));
    assert_eq!(nav.router().current_query(), "page=home");
}

// === Properties ===

#[derive(Debug, Clone)]
enum Action {
    Navigate(PageKey),
    SelectProduct(String),
    SelectCategory(Option<String>),
}

fn page_key() -> impl Strategy<Value = PageKey> {
    prop_oneof![
        prop::sample::select(StorePage::ALL.to_vec()).prop_map(PageKey::from),
        prop::sample::select(AdminPage::ALL.to_vec()).prop_map(PageKey::from),
    ]
}

fn entity_id() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 &=%+?-]{0,12}"
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        page_key().prop_map(Action::Navigate),
        entity_id().prop_map(Action::SelectProduct),
        proptest::option::of(entity_id()).prop_map(Action::SelectCategory),
    ]
}

fn run(store: &mut NavigationStore, actions: &[Action]) {
    for action in actions {
        match action {
            Action::Navigate(page) => store.navigate(page.clone()),
            Action::SelectProduct(id) => store.select_product(id.as_str()),
            Action::SelectCategory(id) => store.select_category(id.as_deref().map(CategoryId::new)),
        }
    }
}

proptest! {
    #[test]
    fn decode_restores_encoded_state(actions in prop::collection::vec(action(), 0..12)) {
        let mut store = NavigationStore::new(&NavConfig::default());
        run(&mut store, &actions);

        let encoded = codec().encode(store.snapshot()).to_canonical_string();
        let restored = decode_into_fresh_store(&encoded);

        prop_assert!(
            restored.snapshot().is_equivalent(store.snapshot()),
            "{:?} -> {} -> {:?}",
            store.snapshot(),
            encoded,
            restored.snapshot()
        );
    }

    #[test]
    fn encoding_is_a_fixpoint(actions in prop::collection::vec(action(), 0..12)) {
        let mut store = NavigationStore::new(&NavConfig::default());
        run(&mut store, &actions);

        let once = codec().encode(store.snapshot());
        let restored = decode_into_fresh_store(&once.to_canonical_string());
        let twice = codec().encode(restored.snapshot());

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn any_external_url_settles_with_at_most_one_write(
        actions in prop::collection::vec(action(), 0..6),
        raw in "(page|id|category|view|x)=[a-z0-9-]{0,14}(&(page|id|category|view|x)=[a-z0-9-]{0,14}){0,3}",
    ) {
        let mut nav = NavContext::new(NavConfig::default(), MemoryRouter::with_query("page=home"));
        nav.mount();
        nav.tick();
        for action in &actions {
            match action {
                Action::Navigate(page) => { nav.navigate(page.clone()); }
                Action::SelectProduct(id) => { nav.select_product(id.as_str()); }
                Action::SelectCategory(id) => { nav.select_category(id.as_deref().map(CategoryId::new)); }
            }
            nav.tick();
        }

        nav.router_mut().push(raw);
        let before = nav.router().writes().len();
        nav.url_changed();
        nav.tick();
        nav.url_changed();
        nav.tick();
        nav.url_changed();

        prop_assert!(nav.router().writes().len() - before <= 1);

        let expected = nav
            .synchronizer()
            .codec()
            .encode_against(nav.store().snapshot(), &UrlQuery::parse(&nav.router().current_query()));
        prop_assert!(expected.is_equivalent(&UrlQuery::parse(&nav.router().current_query())));
    }
}
