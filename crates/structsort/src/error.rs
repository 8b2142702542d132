//! Error types for the structsort crate.
//!
//! Ordering itself never fails; only configuring an [`Orderer`](crate::Orderer)
//! can.

use thiserror::Error;

/// Errors that can occur when configuring the ordering engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    /// A limit was set to a value the engine cannot work with.
    #[error("limit '{name}' must be at least 1, got {value}")]
    InvalidLimit { name: &'static str, value: usize },
}

/// Result type for structsort operations.
pub type Result<T> = std::result::Result<T, OrderError>;
