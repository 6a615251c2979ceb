use std::sync::Arc;

use contracts::domain::a101_cart::{Cart, QuantityUpdate};

use crate::shared::storage::KeyValueStore;

/// Cart bound to a key-value store: every mutation writes the whole cart.
pub struct CartStore {
    cart: Cart,
    storage: Arc<dyn KeyValueStore>,
}

impl CartStore {
    pub const STORAGE_KEY: &'static str = "posCart";

    /// Restore the persisted cart. A missing key gives an empty cart; an
    /// unreadable payload is logged and discarded.
    pub fn load(storage: Arc<dyn KeyValueStore>) -> Self {
        let cart = match storage.get(Self::STORAGE_KEY) {
            None => Cart::new(),
            Some(raw) => match serde_json::from_str::<Cart>(&raw) {
                Ok(cart) => cart,
                Err(e) => {
                    log::warn!("Discarding unreadable persisted cart: {}", e);
                    Cart::new()
                }
            },
        };
        log::debug!("Cart restored with {} line(s)", cart.item_count());
        Self { cart, storage }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn add(&mut self, product_id: &str, name: &str, price: f64) -> u32 {
        let quantity = self.cart.add(product_id, name, price);
        self.persist();
        quantity
    }

    pub fn remove(&mut self, product_id: &str) -> bool {
        let removed = self.cart.remove(product_id);
        if removed {
            self.persist();
        }
        removed
    }

    pub fn update_quantity(&mut self, product_id: &str, delta: i32) -> QuantityUpdate {
        let outcome = self.cart.update_quantity(product_id, delta);
        if outcome != QuantityUpdate::NotInCart {
            self.persist();
        }
        outcome
    }

    pub fn clear(&mut self) {
        self.cart.clear();
        self.persist();
    }

    fn persist(&self) {
        let payload = match serde_json::to_string(&self.cart) {
            Ok(payload) => payload,
            Err(e) => {
                log::error!("Failed to serialize cart: {}", e);
                return;
            }
        };
        if let Err(e) = self.storage.set(Self::STORAGE_KEY, &payload) {
            log::warn!("Cart not persisted: {}", e);
        }
    }
}
