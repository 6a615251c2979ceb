pub mod grid;

pub use grid::CatalogPanel;
