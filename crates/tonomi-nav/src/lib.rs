//! Navigation for the Tonomi storefront.
//!
//! The storefront and its admin back-office are one single-page app. This
//! crate keeps the in-memory navigation state and the address bar's query
//! string in step, so every screen has a shareable URL and back/forward work
//! without page reloads.
//!
//! # Architecture
//!
//! - [`NavigationStore`]: current view, page and selections
//! - [`UrlCodec`]: pure state ⇄ query mapping
//! - [`Synchronizer`]: guarded state machine between the store and a [`Router`]
//! - [`NavContext`]: owns all three for one application root
//!
//! # Example
//!
//! ```rust
//! use tonomi_nav::prelude::*;
//!
//! let mut nav = NavContext::new(NavConfig::default(), MemoryRouter::with_query("?page=cart"));
//! nav.mount();
//! assert_eq!(nav.store().page(), &PageKey::Store(StorePage::Cart));
//!
//! nav.open_product("prod-1");
//! assert_eq!(nav.router().current_query(), "id=prod-1&page=product");
//! ```

pub mod prelude;
mod codec;
mod config;
mod context;
mod error;
mod page;
mod query;
mod router;
mod state;
mod sync;

pub use codec::*;
pub use config::*;
pub use context::*;
pub use error::*;
pub use page::*;
pub use query::*;
pub use router::*;
pub use state::*;
pub use sync::*;
