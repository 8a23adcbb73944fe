//! Common utilities shared by the registration services.
//!
//! This crate provides:
//! - Application error type wrapping domain failures
//! - Configuration structures
//! - Tracing bootstrap for embedding collaborators

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::*;
pub use error::{AppError, AppResult};
pub use telemetry::init_tracing;
