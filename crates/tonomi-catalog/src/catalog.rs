//! In-memory catalog service.
//!
//! The storefront has no backend: every lookup is a pass-through over the
//! static lists handed to [`Catalog::new`] (or the built-in seed data).

use crate::category::Category;
use crate::error::CatalogError;
use crate::ids::{CategoryId, ProductId};
use crate::product::Product;

/// Category id used for promotional filtering.
pub const PROMOTIONS_CATEGORY_ID: &str = "cat-7";

/// Read-only product and category catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl Catalog {
    /// Create a catalog over the given products and categories.
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        let mut categories = categories;
        categories.sort_by_key(|c| c.position);
        Self {
            products,
            categories,
        }
    }

    /// Catalog populated with the storefront's built-in data.
    pub fn seeded() -> Self {
        Self::new(seed_products(), seed_categories())
    }

    /// All products in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    pub fn product(&self, id: &ProductId) -> Result<&Product, CatalogError> {
        self.products
            .iter()
            .find(|p| &p.id == id)
            .ok_or_else(|| CatalogError::ProductNotFound(id.to_string()))
    }

    /// All categories ordered by menu position.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a category by id.
    pub fn category(&self, id: &CategoryId) -> Result<&Category, CatalogError> {
        self.categories
            .iter()
            .find(|c| &c.id == id)
            .ok_or_else(|| CatalogError::CategoryNotFound(id.to_string()))
    }

    /// Products belonging to a category.
    ///
    /// The promotional category also collects every discounted product,
    /// whatever category it is filed under.
    pub fn products_in_category(&self, id: &CategoryId) -> Vec<&Product> {
        let promotional = self.category(id).is_ok_and(|c| c.promotional);
        self.products
            .iter()
            .filter(|p| &p.category_id == id || (promotional && p.is_on_sale()))
            .collect()
    }

    /// Products shown on the promotions page.
    pub fn promotions(&self) -> Vec<&Product> {
        match self.categories.iter().find(|c| c.promotional) {
            Some(cat) => self.products_in_category(&cat.id),
            None => self.products.iter().filter(|p| p.is_on_sale()).collect(),
        }
    }

    /// Case-insensitive substring search over names and descriptions.
    pub fn search(&self, text: &str) -> Vec<&Product> {
        let needle = text.trim().to_lowercase();
        if needle.is_empty() {
            return self.products.iter().collect();
        }
        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p
                        .description
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(&needle))
            })
            .collect()
    }
}

fn seed_categories() -> Vec<Category> {
    vec![
        Category::new("cat-1", "Electronics", "electronics")
            .with_description("Audio, wearables and smart home")
            .with_position(1),
        Category::new("cat-2", "Home & Kitchen", "home-kitchen").with_position(2),
        Category::new("cat-3", "Fashion", "fashion").with_position(3),
        Category::new("cat-4", "Beauty", "beauty").with_position(4),
        Category::new("cat-5", "Sports & Outdoors", "sports-outdoors").with_position(5),
        Category::new("cat-6", "Books", "books").with_position(6),
        Category::new(PROMOTIONS_CATEGORY_ID, "Deals", "deals")
            .with_description("Limited-time offers")
            .with_position(7)
            .promotional(),
    ]
}

fn seed_products() -> Vec<Product> {
    vec![
        Product::new("prod-1", "Wireless Headphones", 8999, "cat-1")
            .with_description("Over-ear, noise cancelling, 30h battery")
            .with_compare_at(12999)
            .with_stock(42),
        Product::new("prod-2", "Smart Watch", 19999, "cat-1")
            .with_description("Heart rate, GPS and sleep tracking")
            .with_stock(15),
        Product::new("prod-3", "Ceramic Pour-Over Set", 3499, "cat-2")
            .with_description("Dripper, carafe and two cups")
            .with_stock(30),
        Product::new("prod-4", "Cast Iron Skillet", 4599, "cat-2")
            .with_compare_at(5999)
            .with_stock(8),
        Product::new("prod-5", "Linen Shirt", 5900, "cat-3").with_stock(60),
        Product::new("prod-6", "Leather Sneakers", 11900, "cat-3")
            .with_compare_at(14900)
            .with_stock(0),
        Product::new("prod-7", "Vitamin C Serum", 2800, "cat-4").with_stock(120),
        Product::new("prod-8", "Trail Backpack", 8900, "cat-5")
            .with_description("28L, water resistant")
            .with_stock(22),
        Product::new("prod-9", "Yoga Mat", 3900, "cat-5").with_stock(35),
        Product::new("prod-10", "The Rust Programming Language", 3995, "cat-6")
            .with_description("The official book on Rust")
            .with_stock(18),
        Product::new("prod-11", "Gift Card Bundle", 4500, PROMOTIONS_CATEGORY_ID).with_stock(999),
    ]
}
