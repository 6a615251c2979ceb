//! Configuration the host page hands to the POS screen.
//!
//! The server renders it as JSON inside
//! `<script id="pos-data" type="application/json">`. Every field has a
//! default so a partial payload still yields a usable screen.

use serde::{Deserialize, Serialize};

use crate::domain::a104_catalog::{CatalogProduct, Category, PaymentMethod};
use crate::shared::scalar::deserialize_opt_id;

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"{
    "buscar_clientes_url": "/pos/buscar-clientes/",
    "crear_cliente_url": "/pos/crear-cliente/",
    "procesar_pago_url": "/pos/procesar-pago/",
    "venta_detail_url": "/ventas/0/",
    "csrf_token": "",
    "cliente_mostrador_id": null,
    "siguiente_ticket": 1,
    "productos": [],
    "categorias": [],
    "metodos_pago": []
}"#;

/// `client_id` compared against the configured walk-in id, ignoring
/// surrounding whitespace on either side. No walk-in id means no match.
pub fn is_walk_in_id(walk_in_id: Option<&str>, client_id: &str) -> bool {
    let client_id = client_id.trim();
    walk_in_id.is_some_and(|walk_in| !client_id.is_empty() && walk_in.trim() == client_id)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PosConfig {
    #[serde(default = "default_search_url")]
    pub buscar_clientes_url: String,
    #[serde(default = "default_create_url")]
    pub crear_cliente_url: String,
    #[serde(default = "default_payment_url")]
    pub procesar_pago_url: String,
    /// Template ending in `/0/`; the zero is replaced by the sale id.
    #[serde(default = "default_detail_url")]
    pub venta_detail_url: String,
    #[serde(default)]
    pub csrf_token: String,
    /// Reserved "Mostrador" customer used for quick counter sales.
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub cliente_mostrador_id: Option<String>,
    /// Display hint only; the server assigns real sale ids.
    #[serde(default = "default_next_ticket")]
    pub siguiente_ticket: u64,
    #[serde(default)]
    pub productos: Vec<CatalogProduct>,
    #[serde(default)]
    pub categorias: Vec<Category>,
    #[serde(default)]
    pub metodos_pago: Vec<PaymentMethod>,
}

fn default_search_url() -> String {
    "/pos/buscar-clientes/".to_string()
}

fn default_create_url() -> String {
    "/pos/crear-cliente/".to_string()
}

fn default_payment_url() -> String {
    "/pos/procesar-pago/".to_string()
}

fn default_detail_url() -> String {
    "/ventas/0/".to_string()
}

fn default_next_ticket() -> u64 {
    1
}

impl Default for PosConfig {
    fn default() -> Self {
        Self {
            buscar_clientes_url: default_search_url(),
            crear_cliente_url: default_create_url(),
            procesar_pago_url: default_payment_url(),
            venta_detail_url: default_detail_url(),
            csrf_token: String::new(),
            cliente_mostrador_id: None,
            siguiente_ticket: default_next_ticket(),
            productos: Vec::new(),
            categorias: Vec::new(),
            metodos_pago: Vec::new(),
        }
    }
}

impl PosConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Whether `client_id` is the reserved walk-in customer.
    pub fn is_walk_in(&self, client_id: &str) -> bool {
        is_walk_in_id(self.cliente_mostrador_id.as_deref(), client_id)
    }

    /// Printable detail link for a finished sale.
    ///
    /// `origin` (e.g. `https://caja.example`) is prefixed when the template is
    /// relative.
    pub fn sale_detail_href(&self, venta_id: &str, origin: &str) -> String {
        let template = self.venta_detail_url.as_str();
        let path = match template.strip_suffix("/0/") {
            Some(prefix) => format!("{}/{}/", prefix, venta_id),
            None => template.to_string(),
        };
        if path.starts_with("http") {
            path
        } else {
            format!("{}{}", origin.trim_end_matches('/'), path)
        }
    }

    pub fn payment_method(&self, id: &str) -> Option<&PaymentMethod> {
        self.metodos_pago.iter().find(|m| m.id == id)
    }
}
