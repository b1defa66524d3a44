//! Utility modules for the calculator
//!
//! - **error**: application error type and `Result` alias
//! - **logging**: `tracing` subscriber setup

pub mod error; // Error handling
pub mod logging; // Logging setup

pub use error::{AppError, Result};
pub use logging::{LogLevel, init_logging};
