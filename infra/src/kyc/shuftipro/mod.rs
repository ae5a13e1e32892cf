//! ShuftiPro KYC client
//!
//! One verification check or one status lookup per call:
//! - `request` maps customer data into the provider's request bodies
//! - `response` classifies the provider's answers into a `KycResult` or an error
//! - `client` dispatches requests, bounding verification checks by a deadline

pub mod client;
pub mod config;
pub mod error;
pub mod request;
pub mod response;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use client::{ShuftiProClient, CHECK_CUSTOMER_TIMEOUT, STATUS_ENDPOINT};
pub use config::ShuftiProConfig;
pub use error::ProviderError;
pub use request::{RequestBuilder, StatusRequest, VerificationRequest};
pub use response::{classify, describe_error, describe_event, ErrorField, ProviderResponse};
