use contracts::domain::a102_client::{
    ClientSearchResponse, ClientSummary, CreateClientRequest, CreateClientResponse,
};
use gloo_net::http::Request;

use crate::shared::api_utils::{with_query, CSRF_HEADER};

/// Search customers by free text; an empty query lists the default set.
pub async fn search_clients(search_url: &str, query: &str) -> Result<Vec<ClientSummary>, String> {
    let url = with_query(search_url, "q", query);

    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Client search failed: {}", response.status()));
    }

    response
        .json::<ClientSearchResponse>()
        .await
        .map(|body| body.clientes)
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create a customer.
///
/// The server answers validation problems with a 4xx status and a JSON body
/// carrying `error`, so the body is parsed whatever the status is.
pub async fn create_client(
    create_url: &str,
    csrf_token: &str,
    request: &CreateClientRequest,
) -> Result<CreateClientResponse, String> {
    let response = Request::post(create_url)
        .header(CSRF_HEADER, csrf_token)
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    let status = response.status();
    response
        .json::<CreateClientResponse>()
        .await
        .map_err(|e| format!("Failed to parse response (HTTP {}): {}", status, e))
}
