//! Transport helpers for gRPC clients and servers.

use tonic::transport::Channel;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Connection errors.
///
/// Invalid addresses are construction errors and must not be retried;
/// connect failures are transient and may be.
#[derive(Debug, thiserror::Error)]
pub enum ConnectError {
    #[error("Invalid address '{0}': {1}")]
    InvalidAddress(String, String),

    #[error("Connection to '{0}' failed: {1}")]
    Connect(String, String),
}

impl ConnectError {
    /// True for errors worth retrying with backoff.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Connect(..))
    }
}

/// Connect to a gRPC service by TCP address.
///
/// The address is "host:port"; an `http://` scheme is added when missing.
pub async fn connect_to_address(address: &str) -> Result<Channel, ConnectError> {
    let uri = if address.starts_with("http://") || address.starts_with("https://") {
        address.to_string()
    } else {
        format!("http://{address}")
    };

    info!(address = %address, "Connecting to service");

    let channel = Channel::from_shared(uri)
        .map_err(|e| ConnectError::InvalidAddress(address.to_string(), e.to_string()))?
        .connect()
        .await
        .map_err(|e| ConnectError::Connect(address.to_string(), e.to_string()))?;

    Ok(channel)
}

/// Tower trace layer for gRPC servers.
///
/// Creates a tracing span per request carrying the request path; works at
/// the HTTP layer, before tonic deserializes the protobuf body.
pub fn grpc_trace_layer() -> TraceLayer<
    tower_http::classify::SharedClassifier<tower_http::classify::GrpcErrorsAsFailures>,
    impl Fn(&http::Request<tonic::body::BoxBody>) -> tracing::Span + Clone,
> {
    TraceLayer::new_for_grpc().make_span_with(|request: &http::Request<tonic::body::BoxBody>| {
        let path = request.uri().path();
        tracing::info_span!("grpc", %path)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_address_is_not_retryable() {
        let err = ConnectError::InvalidAddress("bad address".into(), "invalid uri".into());
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_connect_failure_is_retryable() {
        let err = ConnectError::Connect("localhost:1".into(), "refused".into());
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_connect_rejects_malformed_address() {
        let result = connect_to_address("not a uri at all\u{7f}").await;
        assert!(matches!(result, Err(ConnectError::InvalidAddress(..))));
    }
}
