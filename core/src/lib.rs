//! # KYC Core
//!
//! Provider-independent domain layer for identity verification.
//! This crate contains the customer data handed to a KYC provider, the
//! normalized result every provider maps its answers into, validation
//! errors, and the `KycPlatform` interface implemented by provider clients.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
