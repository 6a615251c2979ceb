pub mod completed;
pub mod payment;

pub use completed::SaleCompletedModal;
pub use payment::PaymentModal;
