//! Upstream gRPC client pool.
//!
//! One client per backend domain, bound eagerly at gateway startup. A
//! bound channel is reused for the life of the process; clients are
//! cheap clones over it, so there is no reconnect-per-request.

use std::time::Duration;

use backon::Retryable;
use tonic::transport::Channel;
use tracing::warn;

use crate::config::UpstreamConfig;
use crate::proto::order::order_service_client::OrderServiceClient;
use crate::proto::product::product_service_client::ProductServiceClient;
use crate::proto::user::user_service_client::UserServiceClient;
use crate::transport::{connect_to_address, ConnectError};
use crate::utils::retry::connection_backoff;

/// Bound clients for the three backend domains.
#[derive(Clone)]
pub struct Upstreams {
    users: UserServiceClient<Channel>,
    products: ProductServiceClient<Channel>,
    orders: OrderServiceClient<Channel>,
}

impl Upstreams {
    /// Connect to every backend before serving traffic.
    ///
    /// Transient connection failures are retried with exponential
    /// backoff; an invalid address fails immediately.
    pub async fn connect(config: &UpstreamConfig) -> Result<Self, ConnectError> {
        let users = bind_channel("users", &config.users).await?;
        let products = bind_channel("products", &config.products).await?;
        let orders = bind_channel("orders", &config.orders).await?;

        Ok(Self {
            users: UserServiceClient::new(users),
            products: ProductServiceClient::new(products),
            orders: OrderServiceClient::new(orders),
        })
    }

    /// Client handle for the user backend.
    pub fn users(&self) -> UserServiceClient<Channel> {
        self.users.clone()
    }

    /// Client handle for the product backend.
    pub fn products(&self) -> ProductServiceClient<Channel> {
        self.products.clone()
    }

    /// Client handle for the order backend.
    pub fn orders(&self) -> OrderServiceClient<Channel> {
        self.orders.clone()
    }
}

async fn bind_channel(domain: &'static str, address: &str) -> Result<Channel, ConnectError> {
    let addr = address.to_string();

    (|| {
        let addr = addr.clone();
        async move { connect_to_address(&addr).await }
    })
    .retry(connection_backoff())
    .when(ConnectError::is_retryable)
    .notify(|err: &ConnectError, dur: Duration| {
        warn!(service = domain, error = %err, delay = ?dur, "Connection failed, retrying");
    })
    .await
}
