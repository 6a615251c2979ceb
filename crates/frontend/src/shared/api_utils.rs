//! API utilities for frontend-backend communication
//!
//! Endpoint URLs come from the host page (`PosConfig`); these helpers only
//! decorate them.

use contracts::shared::PosConfig;
use wasm_bindgen::JsCast;

/// Header Django expects the CSRF token in.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Append `key=value` to `url`, percent-encoding the value.
///
/// An empty value leaves the URL untouched so the endpoint applies its
/// default listing.
///
/// # Example
/// ```ignore
/// let url = with_query("/pos/buscar-clientes/", "q", "ana maría");
/// assert_eq!(url, "/pos/buscar-clientes/?q=ana%20mar%C3%ADa");
/// ```
pub fn with_query(url: &str, key: &str, value: &str) -> String {
    if value.is_empty() {
        return url.to_string();
    }
    let separator = if url.contains('?') { '&' } else { '?' };
    format!(
        "{}{}{}={}",
        url,
        separator,
        key,
        urlencoding::encode(value)
    )
}

/// Current page origin like "https://caja.example", empty without a window.
pub fn page_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// CSRF token from the configuration, falling back to the hidden
/// `csrfmiddlewaretoken` input Django renders into forms.
pub fn csrf_token(config: &PosConfig) -> String {
    if !config.csrf_token.is_empty() {
        return config.csrf_token.clone();
    }
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector("[name=csrfmiddlewaretoken]").ok().flatten())
        .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}
