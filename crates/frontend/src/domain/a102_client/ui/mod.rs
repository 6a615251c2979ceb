pub mod new_client;
pub mod search;

pub use new_client::NewClientForm;
pub use search::ClientSearch;
