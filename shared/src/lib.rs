//! Shared utilities and common types for the KYC adapters
//!
//! This crate provides functionality used across the workspace:
//! - Environment and logging configuration
//! - Tracing subscriber setup
//! - Validation helpers for customer data
//! - Masking of sensitive values in logs

pub mod config;
pub mod logging;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{Environment, LogFormat, LoggingConfig};
pub use logging::init_tracing;
pub use utils::{masking, validation};
