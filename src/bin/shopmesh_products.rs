//! shopmesh-products: product backend service
//!
//! Owns the in-memory product store and exposes it as the
//! `product.ProductService` gRPC contract.

use std::net::SocketAddr;

use tonic::transport::Server;
use tonic_health::server::health_reporter;
use tracing::{error, info};

use shopmesh::config::Config;
use shopmesh::proto::product::product_service_server::ProductServiceServer;
use shopmesh::services::ProductsService;
use shopmesh::transport::grpc_trace_layer;
use shopmesh::utils::bootstrap::init_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting shopmesh-products service");

    let config = Config::load(None).map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    let addr: SocketAddr = config.server.products_addr().parse()?;
    let service = ProductsService::with_seed_data();

    let (mut health_reporter, health_service) = health_reporter();
    health_reporter
        .set_service_status("", tonic_health::ServingStatus::Serving)
        .await;

    info!(address = %addr, "Product service listening");

    Server::builder()
        .layer(grpc_trace_layer())
        .add_service(health_service)
        .add_service(ProductServiceServer::new(service))
        .serve(addr)
        .await?;

    Ok(())
}
