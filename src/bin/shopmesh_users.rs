//! shopmesh-users: user backend service
//!
//! Owns the in-memory user store and exposes it as the `user.UserService`
//! gRPC contract. State is volatile, process-lifetime only.

use std::net::SocketAddr;

use tonic::transport::Server;
use tonic_health::server::health_reporter;
use tracing::{error, info};

use shopmesh::config::Config;
use shopmesh::proto::user::user_service_server::UserServiceServer;
use shopmesh::services::UsersService;
use shopmesh::transport::grpc_trace_layer;
use shopmesh::utils::bootstrap::init_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting shopmesh-users service");

    let config = Config::load(None).map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    let addr: SocketAddr = config.server.users_addr().parse()?;
    let service = UsersService::with_seed_data();

    let (mut health_reporter, health_service) = health_reporter();
    health_reporter
        .set_service_status("", tonic_health::ServingStatus::Serving)
        .await;

    info!(address = %addr, "User service listening");

    Server::builder()
        .layer(grpc_trace_layer())
        .add_service(health_service)
        .add_service(UserServiceServer::new(service))
        .serve(addr)
        .await?;

    Ok(())
}
