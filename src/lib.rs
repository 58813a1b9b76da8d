//! Shopmesh - REST edge over gRPC backends
//!
//! A small service mesh: one axum gateway translating REST calls into
//! gRPC requests against three independent backends (users, products,
//! orders), each owning a volatile in-memory record store.

pub mod config;
pub mod gateway;
pub mod services;
pub mod store;
pub mod transport;
pub mod utils;

pub mod proto {
    pub mod user {
        tonic::include_proto!("user");
    }
    pub mod product {
        tonic::include_proto!("product");
    }
    pub mod order {
        tonic::include_proto!("order");
    }
}
