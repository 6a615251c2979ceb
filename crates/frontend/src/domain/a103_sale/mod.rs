pub mod api;
pub mod checkout;
pub mod error;
pub mod ticket;
pub mod ui;

pub use checkout::{Checkout, CheckoutPhase, CompletedSale, PendingClient};
pub use error::CheckoutError;
pub use ticket::TicketCounter;
