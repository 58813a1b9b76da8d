//! shopmesh-orders: order backend service
//!
//! Owns the in-memory order store and exposes it as the
//! `order.OrderService` gRPC contract. Order items are snapshots; the
//! store never reaches into the other domains.

use std::net::SocketAddr;

use tonic::transport::Server;
use tonic_health::server::health_reporter;
use tracing::{error, info};

use shopmesh::config::Config;
use shopmesh::proto::order::order_service_server::OrderServiceServer;
use shopmesh::services::OrdersService;
use shopmesh::transport::grpc_trace_layer;
use shopmesh::utils::bootstrap::init_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting shopmesh-orders service");

    let config = Config::load(None).map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    let addr: SocketAddr = config.server.orders_addr().parse()?;
    let service = OrdersService::with_seed_data();

    let (mut health_reporter, health_service) = health_reporter();
    health_reporter
        .set_service_status("", tonic_health::ServingStatus::Serving)
        .await;

    info!(address = %addr, "Order service listening");

    Server::builder()
        .layer(grpc_trace_layer())
        .add_service(health_service)
        .add_service(OrderServiceServer::new(service))
        .serve(addr)
        .await?;

    Ok(())
}
