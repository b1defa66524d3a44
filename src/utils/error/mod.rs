//! Error handling utilities
//!
//! Application-level error type wrapping configuration, calculation and I/O failures.

pub mod types;

// Re-export commonly used types
pub use types::{AppError, Result};
