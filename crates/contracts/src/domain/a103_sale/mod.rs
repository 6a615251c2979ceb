pub mod dto;

pub use dto::{ConsumptionMode, DocumentType, SaleRequest, SaleResponse};
