pub mod aggregate;

pub use aggregate::{Cart, CartTotals, LineItem, QuantityUpdate};
