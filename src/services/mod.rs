//! Backend gRPC services.
//!
//! Thin adapters mapping proto messages field-for-field onto the record
//! stores. Not-found comes back as a success-flagged payload, never as a
//! transport-level error.

mod orders;
mod products;
mod users;

pub use orders::OrdersService;
pub use products::ProductsService;
pub use users::UsersService;

use chrono::{DateTime, SecondsFormat, Utc};

/// Render a timestamp the way it crosses the wire (ISO-8601, UTC, millis).
pub(crate) fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}
