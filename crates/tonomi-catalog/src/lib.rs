//! Product and category catalog for the Tonomi storefront.
//!
//! - **Ids**: [`ProductId`] and [`CategoryId`] newtypes shared with navigation
//! - **Catalog**: a read-only service over static, in-memory data
//!
//! # Example
//!
//! ```rust
//! use tonomi_catalog::{Catalog, ProductId};
//!
//! let catalog = Catalog::seeded();
//! let product = catalog.product(&ProductId::new("prod-1")).unwrap();
//! assert_eq!(product.price_display(), "$89.99");
//! ```

pub mod catalog;
pub mod category;
pub mod error;
pub mod ids;
pub mod product;

pub use catalog::{Catalog, PROMOTIONS_CATEGORY_ID};
pub use category::Category;
pub use error::CatalogError;
pub use ids::{CategoryId, ProductId};
pub use product::Product;
