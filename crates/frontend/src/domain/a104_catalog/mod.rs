pub mod state;
pub mod ui;

pub use state::{CatalogFilter, ALL_CATEGORIES};
