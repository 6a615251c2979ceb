use serde::{Deserialize, Serialize};

use crate::shared::scalar::{deserialize_amount, deserialize_id, deserialize_opt_id};

/// Product card data rendered by the host page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogProduct {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub nombre: String,
    /// Price with active promotions already applied by the server.
    #[serde(deserialize_with = "deserialize_amount")]
    pub precio: f64,
    /// Category id; `None` for uncategorized products.
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub categoria: Option<String>,
    #[serde(default)]
    pub tiene_promo: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub nombre: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethod {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub nombre: String,
}
