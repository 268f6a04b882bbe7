//! Shopping cart persisted in browser storage.

use serde::{Deserialize, Serialize};
use tonomi_catalog::{Product, ProductId};

use crate::kv::{KvStore, Storage};
use crate::StoreError;

/// Storage key of the cart.
pub const CART_KEY: &str = "cart";

/// Maximum quantity of a single line.
pub const MAX_LINE_QUANTITY: u32 = 99;

/// One line in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: ProductId,
    pub name: String,
    pub price_cents: i64,
    pub quantity: u32,
}

impl CartItem {
    /// Line total in cents.
    pub fn subtotal_cents(&self) -> i64 {
        self.price_cents * i64::from(self.quantity)
    }
}

/// Shopping cart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the cart, starting empty if nothing (readable) is stored.
    pub fn load<S: Storage>(kv: &KvStore<S>) -> Self {
        kv.load_or_default(CART_KEY)
    }

    /// Persist the cart.
    pub fn save<S: Storage>(&self, kv: &mut KvStore<S>) -> Result<(), StoreError> {
        kv.set(CART_KEY, self)
    }

    /// Add a product, merging with an existing line.
    pub fn add(&mut self, product: &Product, quantity: u32) -> Result<(), StoreError> {
        if quantity == 0 {
            return Err(StoreError::InvalidQuantity(quantity));
        }
        match self.items.iter_mut().find(|i| i.product_id == product.id) {
            Some(item) => {
                let total = item.quantity.saturating_add(quantity);
                if total > MAX_LINE_QUANTITY {
                    return Err(StoreError::InvalidQuantity(total));
                }
                item.quantity = total;
            }
            None => {
                if quantity > MAX_LINE_QUANTITY {
                    return Err(StoreError::InvalidQuantity(quantity));
                }
                self.items.push(CartItem {
                    product_id: product.id.clone(),
                    name: product.name.clone(),
                    price_cents: product.price_cents,
                    quantity,
                });
            }
        }
        Ok(())
    }

    /// Set a line's quantity. Zero removes the line.
    ///
    /// Returns whether the line was in the cart.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: u32) -> Result<bool, StoreError> {
        if quantity > MAX_LINE_QUANTITY {
            return Err(StoreError::InvalidQuantity(quantity));
        }
        if quantity == 0 {
            return Ok(self.remove(id));
        }
        match self.items.iter_mut().find(|i| &i.product_id == id) {
            Some(item) => {
                item.quantity = quantity;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove a line. Returns whether it was present.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|i| &i.product_id != id);
        self.items.len() != before
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Cart lines in the order they were added.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Sum of all line totals in cents.
    pub fn subtotal_cents(&self) -> i64 {
        self.items.iter().map(CartItem::subtotal_cents).sum()
    }

    /// Subtotal formatted as dollars, e.g. `$37.50`.
    pub fn subtotal_display(&self) -> String {
        format!("${:.2}", self.subtotal_cents() as f64 / 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStorage;

    fn mug() -> Product {
        Product::new("prod-1", "Mug", 1250, "cat-2")
    }

    #[test]
    fn test_add_merges_lines() {
        let mut cart = Cart::new();
        cart.add(&mug(), 1).unwrap();
        cart.add(&mug(), 2).unwrap();

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.subtotal_cents(), 3750);
        assert_eq!(cart.subtotal_display(), "$37.50");
    }

    #[test]
    fn test_add_rejects_bad_quantity() {
        let mut cart = Cart::new();
        assert!(matches!(cart.add(&mug(), 0), Err(StoreError::InvalidQuantity(0))));
        assert!(cart.add(&mug(), 100).is_err());

        cart.add(&mug(), 98).unwrap();
        assert!(cart.add(&mug(), 2).is_err());
        assert_eq!(cart.item_count(), 98);
    }

    #[test]
    fn test_set_quantity_zero_removes() {
        let mut cart = Cart::new();
        cart.add(&mug(), 2).unwrap();
        assert!(cart.set_quantity(&ProductId::new("prod-1"), 5).unwrap());
        assert_eq!(cart.item_count(), 5);

        assert!(cart.set_quantity(&ProductId::new("prod-1"), 0).unwrap());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_on_missing_line() {
        let mut cart = Cart::new();
        cart.add(&mug(), 1).unwrap();

        assert!(!cart.set_quantity(&ProductId::new("prod-9"), 3).unwrap());
        assert!(!cart.set_quantity(&ProductId::new("prod-9"), 0).unwrap());
        assert_eq!(cart.item_count(), 1);
        assert!(cart.set_quantity(&ProductId::new("prod-1"), 100).is_err());
    }

    #[test]
    fn test_remove() {
        let mut cart = Cart::new();
        cart.add(&mug(), 1).unwrap();
        assert!(cart.remove(&ProductId::new("prod-1")));
        assert!(!cart.remove(&ProductId::new("prod-1")));
    }

    #[test]
    fn test_save_and_load() {
        let mut kv = KvStore::new(MemoryStorage::new(), "tonomi");
        let mut cart = Cart::new();
        cart.add(&mug(), 2).unwrap();
        cart.save(&mut kv).unwrap();

        assert_eq!(Cart::load(&kv), cart);
    }

    #[test]
    fn test_load_corrupt_cart_is_empty() {
        let mut storage = MemoryStorage::new();
        storage.set_item("tonomi:cart", "{broken").unwrap();
        let kv = KvStore::new(storage, "tonomi");

        assert!(Cart::load(&kv).is_empty());
    }
}
