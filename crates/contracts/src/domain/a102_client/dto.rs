use serde::{Deserialize, Serialize};

use crate::shared::scalar::{deserialize_id, deserialize_nullable_string};

/// One row of the customer search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientSummary {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub nombre_completo: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub telefono: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub ci_nit: String,
}

impl ClientSummary {
    /// Text shown in the dropdown and copied into the search field on
    /// selection: `name — phone`, phone omitted when empty.
    pub fn display_label(&self) -> String {
        let phone = self.telefono.trim();
        if phone.is_empty() {
            self.nombre_completo.clone()
        } else {
            format!("{} — {}", self.nombre_completo, phone)
        }
    }
}

/// `GET <search>?q=...` response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientSearchResponse {
    #[serde(default)]
    pub clientes: Vec<ClientSummary>,
}

/// `POST <create>` body. Optional fields travel as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateClientRequest {
    pub nombre_completo: String,
    pub telefono: String,
    pub ci_nit: String,
    pub email: String,
}

impl CreateClientRequest {
    /// Trimmed copy; `None` when the name is blank.
    pub fn normalized(&self) -> Option<Self> {
        let nombre_completo = self.nombre_completo.trim().to_string();
        if nombre_completo.is_empty() {
            return None;
        }
        Some(Self {
            nombre_completo,
            telefono: self.telefono.trim().to_string(),
            ci_nit: self.ci_nit.trim().to_string(),
            email: self.email.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedClient {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub nombre_completo: String,
}

/// `POST <create>` response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateClientResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub cliente: Option<CreatedClient>,
    #[serde(default)]
    pub error: Option<String>,
}
