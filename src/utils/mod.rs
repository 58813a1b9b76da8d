//! Pure utility functions.
//!
//! Stateless helpers shared across the binaries.

pub mod bootstrap;
pub mod retry;
