use contracts::domain::a103_sale::{SaleRequest, SaleResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::CSRF_HEADER;

/// Submit the finished order.
///
/// `Err` means the request never produced a readable answer (network down,
/// non-JSON body). Business failures come back as `Ok` with
/// `success == false`; the server uses 4xx/5xx statuses for those, so the
/// body is parsed regardless of the status.
pub async fn submit_sale(
    payment_url: &str,
    csrf_token: &str,
    request: &SaleRequest,
) -> Result<SaleResponse, String> {
    let response = Request::post(payment_url)
        .header(CSRF_HEADER, csrf_token)
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    let status = response.status();
    response
        .json::<SaleResponse>()
        .await
        .map_err(|e| format!("Failed to parse response (HTTP {}): {}", status, e))
}
