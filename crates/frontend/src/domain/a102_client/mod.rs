pub mod api;
pub mod state;
pub mod ui;

pub use state::{ClientDropdown, ClientPicker, CLIENT_SEARCH_DEBOUNCE_MS};
