use serde::{Deserialize, Serialize};

use crate::domain::a101_cart::LineItem;
use crate::shared::scalar::{deserialize_opt_amount_text, deserialize_opt_id};

// ============================================================================
// Enums
// ============================================================================

/// Receipt kind requested for the sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    #[default]
    Ticket,
    /// Formal invoice: requires a named customer with tax id.
    Factura,
}

impl DocumentType {
    pub const ALL: [DocumentType; 2] = [DocumentType::Ticket, DocumentType::Factura];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Ticket => "ticket",
            DocumentType::Factura => "factura",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::Ticket => "Ticket",
            DocumentType::Factura => "Factura",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == value)
    }

    pub fn is_invoice(&self) -> bool {
        matches!(self, DocumentType::Factura)
    }
}

/// Where the order is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsumptionMode {
    #[default]
    Local,
    Llevar,
}

impl ConsumptionMode {
    pub const ALL: [ConsumptionMode; 2] = [ConsumptionMode::Local, ConsumptionMode::Llevar];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConsumptionMode::Local => "local",
            ConsumptionMode::Llevar => "llevar",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConsumptionMode::Local => "Para comer aquí",
            ConsumptionMode::Llevar => "Para llevar",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == value)
    }
}

// ============================================================================
// Request / response
// ============================================================================

/// `POST <procesar-pago>` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRequest {
    pub cliente_id: String,
    pub metodo_pago_id: String,
    pub modo_consumo: ConsumptionMode,
    pub tipo_documento: DocumentType,
    pub items: Vec<LineItem>,
}

/// `POST <procesar-pago>` response. Business failures come back with
/// `success: false` and a message, usually with a 4xx status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaleResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub venta_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_amount_text")]
    pub total: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let req = SaleRequest {
            cliente_id: "12".into(),
            metodo_pago_id: "1".into(),
            modo_consumo: ConsumptionMode::Llevar,
            tipo_documento: DocumentType::Factura,
            items: vec![LineItem {
                id: "7".into(),
                name: "Salteña".into(),
                price: 8.5,
                quantity: 2,
            }],
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["modo_consumo"], "llevar");
        assert_eq!(json["tipo_documento"], "factura");
        assert_eq!(json["items"][0]["quantity"], 2);
        assert_eq!(json["cliente_id"], "12");
    }

    #[test]
    fn test_success_response() {
        let resp: SaleResponse = serde_json::from_str(
            r#"{"success": true, "venta_id": 42, "total": "12.00", "message": "Venta procesada exitosamente"}"#,
        )
        .unwrap();
        assert!(resp.success);
        assert_eq!(resp.venta_id.as_deref(), Some("42"));
        assert_eq!(resp.total.as_deref(), Some("12.00"));
    }

    #[test]
    fn test_failure_response() {
        let resp: SaleResponse =
            serde_json::from_str(r#"{"success": false, "error": "Stock insuficiente para Api"}"#)
                .unwrap();
        assert!(!resp.success);
        assert_eq!(resp.venta_id, None);
        assert_eq!(resp.error.as_deref(), Some("Stock insuficiente para Api"));
    }

    #[test]
    fn test_parse_enums() {
        assert_eq!(DocumentType::parse("factura"), Some(DocumentType::Factura));
        assert_eq!(DocumentType::parse("recibo"), None);
        assert_eq!(ConsumptionMode::parse("llevar"), Some(ConsumptionMode::Llevar));
        assert!(DocumentType::Factura.is_invoice());
        assert!(!DocumentType::default().is_invoice());
    }
}
