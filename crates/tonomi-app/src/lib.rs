//! Tonomi storefront and admin application root.
//!
//! Ties the catalog, navigation and shopper persistence together:
//!
//! - [`Storefront`]: the application root, generic over router and storage
//! - [`resolve_screen`]: picks what to render, with safe fallbacks
//! - [`Session`]: gates admin screens
//!
//! With the `web` feature, [`web`] mounts navigation on `leptos_router`.

mod app;
mod error;
mod screen;
mod session;

#[cfg(feature = "web")]
pub mod web;

pub use app::*;
pub use error::*;
pub use screen::*;
pub use session::*;
