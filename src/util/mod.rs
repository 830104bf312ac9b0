//! Shared utilities.

pub mod precision;

pub use precision::to_precision;
