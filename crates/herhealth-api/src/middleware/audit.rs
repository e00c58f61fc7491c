use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use super::session::USER_HEADER;

/// Request logging middleware.
///
/// One structured `api_request` event per request. Bodies carry health
/// answers and are never logged; neither is the user id, only whether the
/// request arrived with one.
pub async fn audit_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let signed_in = req.headers().contains_key(USER_HEADER);

    let response = next.run(req).await;

    let status = response.status();
    if status.is_server_error() {
        tracing::warn!(%method, %path, status = status.as_u16(), signed_in, "api_request");
    } else {
        tracing::info!(%method, %path, status = status.as_u16(), signed_in, "api_request");
    }

    response
}
