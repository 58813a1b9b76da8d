//! REST edge gateway.
//!
//! Maps each REST route onto exactly one upstream gRPC call, translating
//! query/path/body parameters into the RPC request shape and relaying the
//! RPC response as the HTTP body. No aggregation across domains: every
//! request touches a single backend.

mod clients;
mod error;
mod orders;
mod products;
mod users;

pub use clients::Upstreams;
pub use error::GatewayError;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::store::{DEFAULT_LIMIT, DEFAULT_PAGE};

/// Build the gateway router over a connected upstream pool.
pub fn router(upstreams: Upstreams) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/users", get(users::list).post(users::create))
        .route(
            "/users/{id}",
            get(users::get).put(users::update).delete(users::delete),
        )
        .route("/products", get(products::list).post(products::create))
        .route(
            "/products/{id}",
            get(products::get)
                .put(products::update)
                .delete(products::delete),
        )
        .route("/orders", get(orders::list).post(orders::create))
        .route(
            "/orders/{id}",
            get(orders::get).put(orders::update).delete(orders::delete),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(upstreams)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Parse a pagination query parameter.
///
/// Missing or malformed values degrade to the default rather than 400;
/// non-positive values pass through and are normalized by the store.
pub(crate) fn page_param(raw: Option<&str>, default: i32) -> i32 {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(default)
}

pub(crate) fn page_params(page: Option<&str>, limit: Option<&str>) -> (i32, i32) {
    (
        page_param(page, DEFAULT_PAGE),
        page_param(limit, DEFAULT_LIMIT),
    )
}

/// Relay a success-flagged upstream payload.
///
/// The body passes through unchanged; `success=false` (the backends only
/// flag not-found) maps to 404 instead of a 2xx-shaped body.
pub(crate) fn flagged<T: Serialize>(success: bool, body: T) -> Response {
    let status = if success {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };
    (status, Json(body)).into_response()
}
