pub mod panel;

pub use panel::CartPanel;

/// Notice shown after a product card is clicked.
pub fn added_message(product_name: &str) -> String {
    format!("{} agregado al pedido", product_name)
}
