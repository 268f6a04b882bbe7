//! Product types.

use crate::ids::{CategoryId, ProductId};
use serde::{Deserialize, Serialize};

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// URL-friendly slug.
    pub slug: String,
    /// Long description.
    pub description: Option<String>,
    /// Price in cents.
    pub price_cents: i64,
    /// Original price in cents when the product is discounted.
    pub compare_at_cents: Option<i64>,
    /// Owning category.
    pub category_id: CategoryId,
    /// Primary image URL.
    pub image_url: Option<String>,
    /// Units in stock.
    pub stock: i64,
}

impl Product {
    /// Create a new product.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price_cents: i64,
        category_id: impl Into<CategoryId>,
    ) -> Self {
        let name = name.into();
        Self {
            id: id.into(),
            slug: slugify(&name),
            name,
            description: None,
            price_cents,
            compare_at_cents: None,
            category_id: category_id.into(),
            image_url: None,
            stock: 0,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the compare-at (original) price.
    pub fn with_compare_at(mut self, cents: i64) -> Self {
        self.compare_at_cents = Some(cents);
        self
    }

    /// Set units in stock.
    pub fn with_stock(mut self, stock: i64) -> Self {
        self.stock = stock;
        self
    }

    /// Whether the product sells below its compare-at price.
    pub fn is_on_sale(&self) -> bool {
        self.compare_at_cents
            .is_some_and(|original| original > self.price_cents)
    }

    /// Whether at least one unit is in stock.
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Format the price as a dollar string.
    pub fn price_display(&self) -> String {
        format!("${:.2}", self.price_cents as f64 / 100.0)
    }
}

fn slugify(name: &str) -> String {
    name.to_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_new_derives_slug() {
        let p = Product::new("prod-1", "Wireless Headphones (Black)", 8999, "cat-1");
        assert_eq!(p.slug, "wireless-headphones-black");
    }

    #[test]
    fn test_sale_detection() {
        let p = Product::new("prod-1", "Lamp", 2000, "cat-2");
        assert!(!p.is_on_sale());

        let p = p.with_compare_at(3000);
        assert!(p.is_on_sale());

        let p = p.with_compare_at(1500);
        assert!(!p.is_on_sale());
    }

    #[test]
    fn test_price_display() {
        let p = Product::new("prod-1", "Mug", 1250, "cat-2");
        assert_eq!(p.price_display(), "$12.50");
    }

    #[test]
    fn test_stock() {
        let p = Product::new("prod-1", "Mug", 1250, "cat-2");
        assert!(!p.in_stock());
        assert!(p.with_stock(4).in_stock());
    }
}
