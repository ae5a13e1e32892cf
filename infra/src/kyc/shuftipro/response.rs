//! Classification of ShuftiPro responses
//!
//! Every answer is decoded into `ProviderResponse` first. A 200 answer is
//! mapped into a `KycResult` by its event; any other status becomes an error,
//! chosen by the shape of the `error` field.

use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

use kyc_core::domain::entities::{KycDetails, KycProvider, KycResult, KycStatus};

use super::error::ProviderError;
use crate::KycError;

const STATUS_OK: u16 = 200;

pub const EVENT_REQUEST_PENDING: &str = "request.pending";
pub const EVENT_REQUEST_INVALID: &str = "request.invalid";
pub const EVENT_VERIFICATION_CANCELLED: &str = "verification.cancelled";
pub const EVENT_REQUEST_TIMEOUT: &str = "request.timeout";
pub const EVENT_REQUEST_UNAUTHORIZED: &str = "request.unauthorized";
pub const EVENT_VERIFICATION_ACCEPTED: &str = "verification.accepted";
pub const EVENT_VERIFICATION_DECLINED: &str = "verification.declined";
pub const EVENT_VERIFICATION_STATUS_CHANGED: &str = "verification.status.changed";
pub const EVENT_REQUEST_DELETED: &str = "request.deleted";
pub const EVENT_REQUEST_RECEIVED: &str = "request.received";
pub const EVENT_REVIEW_PENDING: &str = "review.pending";

static EVENT_DESCRIPTIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (EVENT_REQUEST_PENDING, "Verification request is pending"),
        (EVENT_REQUEST_INVALID, "Request parameters provided in request are invalid"),
        (EVENT_VERIFICATION_CANCELLED, "Request is cancelled by the user"),
        (EVENT_REQUEST_TIMEOUT, "Request has timed out after a specific period of time"),
        (
            EVENT_REQUEST_UNAUTHORIZED,
            "Request is unauthorized: the information provided in the authorization header is invalid",
        ),
        (EVENT_VERIFICATION_ACCEPTED, "Request was valid and accepted after verification"),
        (EVENT_VERIFICATION_DECLINED, "Request was valid and declined after verification"),
        (EVENT_VERIFICATION_STATUS_CHANGED, "Request status has been updated"),
        (EVENT_REQUEST_DELETED, "Request has been deleted"),
        (EVENT_REQUEST_RECEIVED, "Request has been received"),
        (
            EVENT_REVIEW_PENDING,
            "Documents are collected and the request is pending the client's review",
        ),
    ])
});

/// Human description of a provider event; never empty
pub fn describe_event(event: &str) -> String {
    match EVENT_DESCRIPTIONS.get(event) {
        Some(description) => description.to_string(),
        None if event.is_empty() => "Provider response carries no event".to_string(),
        None => format!("Unknown provider event '{}'", event),
    }
}

/// Shape of the `error` field of a response
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ErrorField {
    /// Missing, `null`, an empty string or any other non-object value
    #[default]
    Absent,
    /// An object decoded into a `ProviderError` (possibly with all fields empty)
    Structured(ProviderError),
    /// An object whose fields have unexpected types
    Malformed,
}

impl ErrorField {
    fn from_value(value: serde_json::Value) -> Self {
        match value {
            value @ serde_json::Value::Object(_) => match serde_json::from_value(value) {
                Ok(error) => ErrorField::Structured(error),
                Err(_) => ErrorField::Malformed,
            },
            _ => ErrorField::Absent,
        }
    }

    /// The reported error, provided it is well formed and not empty
    pub fn into_provider_error(self) -> Result<ProviderError, KycError> {
        match self {
            ErrorField::Structured(error) if !error.is_empty() => Ok(error),
            _ => Err(KycError::Format),
        }
    }
}

impl<'de> Deserialize<'de> for ErrorField {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serde_json::Value::deserialize(deserializer).map(ErrorField::from_value)
    }
}

/// Any response body returned by the ShuftiPro API
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ProviderResponse {
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub event: Option<String>,
    #[serde(default)]
    pub error: ErrorField,
    #[serde(default)]
    pub verification_url: Option<String>,
    #[serde(default)]
    pub declined_reason: Option<String>,
    #[serde(default)]
    pub verification_result: Option<serde_json::Value>,
}

impl ProviderResponse {
    pub fn event(&self) -> &str {
        self.event.as_deref().unwrap_or_default()
    }

    pub fn reference(&self) -> &str {
        self.reference.as_deref().unwrap_or_default()
    }

    /// Map the provider's event into the normalized result
    pub fn into_kyc_result(mut self) -> KycResult {
        let event = self.event.take().unwrap_or_default();
        match event.as_str() {
            EVENT_VERIFICATION_ACCEPTED => KycResult::approved(),
            EVENT_VERIFICATION_DECLINED => KycResult::declined(
                self.declined_reason
                    .into_iter()
                    .filter(|reason| !reason.is_empty())
                    .collect(),
            ),
            EVENT_REQUEST_PENDING
            | EVENT_REQUEST_RECEIVED
            | EVENT_REVIEW_PENDING
            | EVENT_VERIFICATION_STATUS_CHANGED => {
                KycResult::pending(KycProvider::ShuftiPro, self.reference())
            }
            other => KycResult {
                status: KycStatus::Unclear,
                details: Some(KycDetails {
                    reasons: vec![describe_event(other)],
                }),
                ..Default::default()
            },
        }
    }
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    error: ErrorField,
}

/// Extract the structured error from a raw response body
///
/// Fails with `KycError::Format` unless the body holds an `error` object with
/// at least one non-empty field.
pub fn describe_error(body: &[u8]) -> Result<ProviderError, KycError> {
    let envelope: ErrorEnvelope = serde_json::from_slice(body).map_err(|_| KycError::Format)?;
    envelope.error.into_provider_error()
}

/// Turn an HTTP status and body into a normalized result or a typed error
pub fn classify(status: u16, body: &[u8]) -> Result<KycResult, KycError> {
    let response: ProviderResponse = serde_json::from_slice(body).map_err(|source| KycError::Decode {
        source,
        status_code: status,
    })?;

    if status != STATUS_OK {
        let ProviderResponse { event, error, .. } = response;
        let error = match error {
            ErrorField::Absent => KycError::DescribedEvent {
                description: describe_event(event.as_deref().unwrap_or_default()),
                status_code: status,
            },
            field => match field.into_provider_error() {
                Ok(error) => KycError::Provider {
                    error,
                    status_code: status,
                },
                Err(format_error) => format_error,
            },
        };
        return Err(error);
    }

    Ok(response.into_kyc_result())
}
