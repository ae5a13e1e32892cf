//! Domain-specific error types.

use thiserror::Error;

/// Errors raised while checking customer data before it reaches a provider
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field required: {field}")]
    RequiredField { field: String },

    #[error("Invalid format for field: {field}")]
    InvalidFormat { field: String },

    #[error("At least one of document, selfie or address must be provided")]
    NoVerificationService,
}
