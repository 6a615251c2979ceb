use serde::{Deserialize, Serialize};

// ============================================================================
// Line item
// ============================================================================

/// One product in the cart.
///
/// This is also the wire shape of `items` in the sale submission and the
/// shape persisted in local storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl LineItem {
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

// ============================================================================
// Cart
// ============================================================================

/// Result of [`Cart::update_quantity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityUpdate {
    Changed(u32),
    Removed,
    NotInCart,
}

/// Totals shown under the order list and in the payment dialog.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CartTotals {
    pub subtotal: f64,
    /// No taxes or discounts are applied client side: always equals `subtotal`.
    pub total: f64,
    pub item_count: usize,
}

/// Ordered list of line items, at most one per product id.
///
/// Every item has `quantity >= 1`; an item whose quantity would drop to zero
/// is removed instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<LineItem>", into = "Vec<LineItem>")]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from untrusted rows (e.g. a persisted payload).
    ///
    /// Rows with zero quantity are dropped, duplicated ids are merged into the
    /// first occurrence, and non-finite or negative prices are clamped to zero.
    pub fn from_items(rows: Vec<LineItem>) -> Self {
        let mut cart = Self::new();
        for mut row in rows {
            if row.quantity == 0 {
                continue;
            }
            row.price = sanitize_price(row.price);
            match cart.items.iter_mut().find(|item| item.id == row.id) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(row.quantity)
                }
                None => cart.items.push(row),
            }
        }
        cart
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn get(&self, product_id: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == product_id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of quantities over all lines.
    pub fn unit_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |acc, item| acc.saturating_add(item.quantity))
    }

    /// Add one unit of a product. Returns the resulting quantity.
    pub fn add(&mut self, product_id: &str, name: &str, price: f64) -> u32 {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == product_id) {
            item.quantity = item.quantity.saturating_add(1);
            return item.quantity;
        }
        self.items.push(LineItem {
            id: product_id.to_string(),
            name: name.to_string(),
            price: sanitize_price(price),
            quantity: 1,
        });
        1
    }

    /// Remove a line. Returns `false` when the product was not in the cart.
    pub fn remove(&mut self, product_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != product_id);
        self.items.len() != before
    }

    /// Shift a line's quantity by `delta`; reaching zero or below removes it.
    pub fn update_quantity(&mut self, product_id: &str, delta: i32) -> QuantityUpdate {
        let Some(item) = self.items.iter_mut().find(|item| item.id == product_id) else {
            return QuantityUpdate::NotInCart;
        };

        let next = i64::from(item.quantity) + i64::from(delta);
        if next <= 0 {
            self.remove(product_id);
            return QuantityUpdate::Removed;
        }

        item.quantity = u32::try_from(next).unwrap_or(u32::MAX);
        QuantityUpdate::Changed(item.quantity)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of `price * quantity` over all lines.
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(LineItem::line_total).sum()
    }

    pub fn totals(&self) -> CartTotals {
        let subtotal = self.subtotal();
        CartTotals {
            subtotal,
            total: subtotal,
            item_count: self.items.len(),
        }
    }
}

impl From<Vec<LineItem>> for Cart {
    fn from(rows: Vec<LineItem>) -> Self {
        Self::from_items(rows)
    }
}

impl From<Cart> for Vec<LineItem> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}

fn sanitize_price(price: f64) -> f64 {
    if price.is_finite() && price > 0.0 {
        price
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_money(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_adding_same_product_twice_increments_quantity() {
        let mut cart = Cart::new();
        assert_eq!(cart.add("7", "Salteña", 8.50), 1);
        assert_eq!(cart.add("7", "Salteña", 8.50), 2);

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.get("7").map(|i| i.quantity), Some(2));
        assert_money(cart.subtotal(), 17.00);
    }

    #[test]
    fn test_new_products_keep_insertion_order() {
        let mut cart = Cart::new();
        cart.add("3", "Api", 5.0);
        cart.add("1", "Pastel", 4.0);
        cart.add("3", "Api", 5.0);

        let ids: Vec<&str> = cart.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1"]);
        assert_eq!(cart.unit_count(), 3);
    }

    #[test]
    fn test_reducing_quantity_to_zero_removes_item() {
        let mut cart = Cart::new();
        cart.add("7", "Salteña", 8.50);
        cart.add("9", "Refresco", 6.00);

        assert_eq!(cart.update_quantity("7", -1), QuantityUpdate::Removed);
        assert_eq!(cart.item_count(), 1);
        assert!(cart.get("7").is_none());
    }

    #[test]
    fn test_large_negative_delta_removes_item() {
        let mut cart = Cart::new();
        cart.add("7", "Salteña", 8.50);
        cart.update_quantity("7", 4);
        assert_eq!(cart.update_quantity("7", -10), QuantityUpdate::Removed);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_changes_and_ignores_unknown() {
        let mut cart = Cart::new();
        cart.add("7", "Salteña", 8.50);
        assert_eq!(cart.update_quantity("7", 2), QuantityUpdate::Changed(3));
        assert_eq!(cart.update_quantity("7", -1), QuantityUpdate::Changed(2));
        assert_eq!(cart.update_quantity("404", 1), QuantityUpdate::NotInCart);
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_remove() {
        let mut cart = Cart::new();
        cart.add("7", "Salteña", 8.50);
        assert!(cart.remove("7"));
        assert!(!cart.remove("7"));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_subtotal_is_sum_of_lines_and_total_equals_subtotal() {
        let mut cart = Cart::new();
        cart.add("1", "Salteña", 8.50);
        cart.add("1", "Salteña", 8.50);
        cart.add("2", "Café", 12.00);
        cart.add("3", "Empanada", 3.25);
        cart.update_quantity("3", 3);

        let expected: f64 = cart.items().iter().map(|i| i.price * i.quantity as f64).sum();
        let totals = cart.totals();
        assert_money(totals.subtotal, expected);
        assert_money(totals.subtotal, 17.00 + 12.00 + 13.00);
        assert_eq!(totals.total, totals.subtotal);
        assert_eq!(totals.item_count, 3);
    }

    #[test]
    fn test_empty_cart_totals() {
        let totals = Cart::new().totals();
        assert_eq!(totals.item_count, 0);
        assert_eq!(totals.subtotal, 0.0);
        assert_eq!(totals.total, 0.0);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let mut cart = Cart::new();
        cart.add("7", "Salteña", 8.5);
        let json = serde_json::to_value(&cart).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{"id": "7", "name": "Salteña", "price": 8.5, "quantity": 1}])
        );
    }

    #[test]
    fn test_deserialize_normalizes_rows() {
        let raw = r#"[
            {"id": "1", "name": "A", "price": 2.0, "quantity": 1},
            {"id": "2", "name": "B", "price": 3.0, "quantity": 0},
            {"id": "1", "name": "A", "price": 2.0, "quantity": 2},
            {"id": "4", "name": "C", "price": -1.0, "quantity": 1}
        ]"#;
        let cart: Cart = serde_json::from_str(raw).unwrap();

        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.get("1").map(|i| i.quantity), Some(3));
        assert!(cart.get("2").is_none());
        assert_eq!(cart.get("4").map(|i| i.price), Some(0.0));
    }
}
