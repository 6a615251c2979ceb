pub mod dto;

pub use dto::{CatalogProduct, Category, PaymentMethod};
