//! Client-side persistence for the Tonomi storefront.
//!
//! Shopper state lives in browser storage through a small key-value helper:
//!
//! - [`Storage`]: the `localStorage`-shaped seam, with [`MemoryStorage`] and,
//!   under the `web` feature, `BrowserStorage`
//! - [`KvStore`]: namespaced JSON values on top of a [`Storage`]
//! - [`Cart`] and [`Wishlist`]: persisted shopper state

#[cfg(feature = "web")]
mod browser;
mod cart;
mod error;
mod kv;
mod wishlist;

#[cfg(feature = "web")]
pub use browser::BrowserStorage;
pub use cart::{Cart, CartItem, CART_KEY, MAX_LINE_QUANTITY};
pub use error::StoreError;
pub use kv::{KvStore, MemoryStorage, Storage};
pub use wishlist::{Wishlist, WISHLIST_KEY};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cart, KvStore, MemoryStorage, Storage, StoreError, Wishlist};
}
