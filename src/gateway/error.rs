//! Gateway error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Failures surfaced to REST callers.
///
/// Domain-level not-found never lands here; the backends flag it inside
/// the payload and the handlers map the flag to 404. This type covers
/// transport-level failure only.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Backend unreachable or the RPC itself failed.
    #[error("Upstream call failed: {0}")]
    Upstream(#[from] tonic::Status),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        match self {
            Self::Upstream(status) => (
                StatusCode::BAD_GATEWAY,
                Json(json!({
                    "success": false,
                    "message": format!("Upstream failure: {}", status.message()),
                })),
            )
                .into_response(),
        }
    }
}
