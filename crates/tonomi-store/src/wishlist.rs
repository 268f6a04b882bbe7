//! Wishlist persisted in browser storage.

use serde::{Deserialize, Serialize};
use tonomi_catalog::ProductId;

use crate::kv::{KvStore, Storage};
use crate::StoreError;

/// Storage key of the wishlist.
pub const WISHLIST_KEY: &str = "wishlist";

/// Saved products, most recently added last.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Wishlist {
    items: Vec<ProductId>,
}

impl Wishlist {
    /// Create an empty wishlist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the wishlist, starting empty if nothing (readable) is stored.
    pub fn load<S: Storage>(kv: &KvStore<S>) -> Self {
        kv.load_or_default(WISHLIST_KEY)
    }

    /// Persist the wishlist.
    pub fn save<S: Storage>(&self, kv: &mut KvStore<S>) -> Result<(), StoreError> {
        kv.set(WISHLIST_KEY, self)
    }

    /// Add or remove a product. Returns whether it is now saved.
    pub fn toggle(&mut self, id: &ProductId) -> bool {
        if self.remove(id) {
            false
        } else {
            self.items.push(id.clone());
            true
        }
    }

    /// Check whether a product is saved.
    pub fn contains(&self, id: &ProductId) -> bool {
        self.items.contains(id)
    }

    /// Unsave a product. Returns whether it was saved.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i != id);
        self.items.len() != before
    }

    /// Saved products, oldest first.
    pub fn items(&self) -> &[ProductId] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
