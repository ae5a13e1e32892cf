//! # Infrastructure Layer
//!
//! This crate implements the infrastructure side of the KYC adapters. It
//! provides the HTTP transport used to reach providers and the concrete
//! provider clients implementing `kyc_core::KycPlatform`.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **HTTP**: a POST-with-headers transport trait, a `reqwest` implementation
//!   and a programmable mock for tests
//! - **KYC**: provider clients (ShuftiPro) built on the transport

// Re-export core types for convenience
pub use kyc_core::errors::*;

/// HTTP transport module - POST primitive shared by provider clients
pub mod http;

/// KYC module - identity verification provider clients
pub mod kyc;

use kyc::shuftipro::{ShuftiProClient, ShuftiProConfig};

/// Build a ShuftiPro client from the process environment
///
/// This function:
/// - Loads a `.env` file if present
/// - Reads the `SHUFTIPRO_*` variables
/// - Creates the `reqwest` transport with the configured request timeout
pub fn initialize() -> Result<ShuftiProClient<http::ReqwestTransport>, KycError> {
    tracing::info!("Initializing ShuftiPro client from environment...");

    let config = load_config()?;
    let client = ShuftiProClient::with_reqwest(config)?;

    tracing::info!("ShuftiPro client initialized successfully");

    Ok(client)
}

/// Load ShuftiPro configuration from environment
fn load_config() -> Result<ShuftiProConfig, KycError> {
    dotenvy::dotenv().ok(); // Load .env file if present

    ShuftiProConfig::from_env()
}

/// Errors returned by KYC provider clients
#[derive(Debug, thiserror::Error)]
pub enum KycError {
    /// Customer data is missing required identity fields
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The client was called with arguments it cannot act on
    #[error("Invalid usage: {0}")]
    Usage(String),

    /// The request could not be serialized
    #[error("Failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    /// The provider could not be reached
    #[error("Transport error: {0}")]
    Transport(String),

    /// The provider answered with a body of unexpected shape
    #[error("Failed to decode provider response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        status_code: u16,
    },

    /// The provider reported a structured error
    #[error("{error}")]
    Provider {
        error: kyc::shuftipro::ProviderError,
        status_code: u16,
    },

    /// The provider answered with an error status but no error object; the
    /// status is available through `KycError::error_code`
    #[error("{description}: check the error code in the result")]
    DescribedEvent { description: String, status_code: u16 },

    /// The provider's own error payload is malformed or empty
    #[error("unexpected format of the returned error: please, report to developers")]
    Format,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The background submission task panicked or was cancelled
    #[error("Verification task failed: {0}")]
    Task(String),
}

impl KycError {
    /// Stringified HTTP status of a non-200 provider answer, if the error
    /// came from one. This is the error code the `DescribedEvent` message
    /// refers to.
    pub fn error_code(&self) -> Option<String> {
        match self {
            KycError::Decode { status_code, .. }
            | KycError::Provider { status_code, .. }
            | KycError::DescribedEvent { status_code, .. } => {
                (*status_code != 200).then(|| status_code.to_string())
            }
            _ => None,
        }
    }

    /// Whether the provider was never reached
    pub fn is_transport(&self) -> bool {
        matches!(self, KycError::Transport(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_only_for_provider_answers() {
        let err = KycError::DescribedEvent {
            description: "Request is unauthorized".to_string(),
            status_code: 401,
        };
        assert_eq!(err.error_code(), Some("401".to_string()));

        assert_eq!(KycError::Format.error_code(), None);
        assert_eq!(KycError::Transport("connection refused".to_string()).error_code(), None);
        assert!(KycError::Transport("connection refused".to_string()).is_transport());
    }

    #[test]
    fn test_validation_error_converts() {
        let err: KycError = ValidationError::RequiredField {
            field: "last_name".to_string(),
        }
        .into();
        assert!(matches!(err, KycError::Validation(_)));
        assert_eq!(err.to_string(), "Validation error: Field required: last_name");
    }
}
