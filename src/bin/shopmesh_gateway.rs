//! shopmesh-gateway: REST edge service
//!
//! Translates the REST surface into gRPC calls against the three
//! backends. One client per domain, bound eagerly at startup:
//!
//! ```text
//! [HTTP client] -> [shopmesh-gateway] -> [shopmesh-users]
//!                        |             -> [shopmesh-products]
//!                        +------------ -> [shopmesh-orders]
//! ```
//!
//! If a backend stays unreachable past the connection backoff, startup
//! fails rather than serving traffic with an unbound client.

use tracing::{error, info};

use shopmesh::config::Config;
use shopmesh::gateway::{self, Upstreams};
use shopmesh::utils::bootstrap::init_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting shopmesh-gateway service");

    let config = Config::load(None).map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    let upstreams = Upstreams::connect(&config.gateway.upstreams)
        .await
        .map_err(|e| {
            error!("Failed to bind upstream clients: {}", e);
            e
        })?;

    let app = gateway::router(upstreams);
    let addr = config.gateway.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(address = %addr, "Gateway listening");

    axum::serve(listener, app).await?;

    Ok(())
}
