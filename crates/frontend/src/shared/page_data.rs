//! Reads the configuration the host page embeds for the POS screen.

use contracts::shared::pos_config::{PosConfig, DEFAULT_CONFIG};

/// Id of the `<script type="application/json">` element holding `PosConfig`.
pub const POS_DATA_ELEMENT_ID: &str = "pos-data";

/// Load configuration from the host page
///
/// Falls back to the embedded default when the element is missing or its
/// payload cannot be parsed.
pub fn load_pos_config() -> PosConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(POS_DATA_ELEMENT_ID))
        .and_then(|el| el.text_content());
    parse_pos_config(raw.as_deref())
}

pub fn parse_pos_config(raw: Option<&str>) -> PosConfig {
    if let Some(raw) = raw.filter(|r| !r.trim().is_empty()) {
        match PosConfig::from_json(raw) {
            Ok(config) => {
                log::debug!(
                    "POS config loaded: {} products, {} payment methods, next ticket {}",
                    config.productos.len(),
                    config.metodos_pago.len(),
                    config.siguiente_ticket
                );
                return config;
            }
            Err(e) => log::warn!("Invalid #{} payload: {}", POS_DATA_ELEMENT_ID, e),
        }
    } else {
        log::warn!("#{} not found on the page", POS_DATA_ELEMENT_ID);
    }

    log::info!("Using default embedded configuration");
    PosConfig::from_json(DEFAULT_CONFIG).unwrap_or_default()
}
