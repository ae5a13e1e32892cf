//! ShuftiPro client implementation
//!
//! ## Behavior
//!
//! - Verification checks race the submission against a deadline
//!   (`CHECK_CUSTOMER_TIMEOUT` unless configured otherwise). When the deadline
//!   wins, the caller gets an unclear result with a status check and the
//!   submission keeps running in the background; its outcome is dropped.
//! - Status checks are a plain request/response round trip.
//! - Credentials are sent as HTTP Basic auth on every request.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use kyc_core::domain::entities::{CustomerData, KycProvider, KycResult};
use kyc_core::services::KycPlatform;
use kyc_shared::masking::mask_value;

use super::config::ShuftiProConfig;
use super::request::RequestBuilder;
use super::response::classify;
use crate::http::{Headers, HttpTransport, ReqwestTransport};
use crate::KycError;

/// Sub-endpoint for status lookups, appended to the host
pub const STATUS_ENDPOINT: &str = "status";

/// How long a verification check may take before it is reported as unclear
pub const CHECK_CUSTOMER_TIMEOUT: Duration = Duration::from_secs(60);

/// ShuftiPro client
///
/// Holds no mutable state; concurrent checks share only the transport.
pub struct ShuftiProClient<T: HttpTransport> {
    host: String,
    headers: Headers,
    builder: RequestBuilder,
    transport: Arc<T>,
    check_timeout: Duration,
}

impl<T: HttpTransport> ShuftiProClient<T> {
    /// Create a new ShuftiPro client on top of `transport`
    pub fn new(config: ShuftiProConfig, transport: Arc<T>) -> Self {
        let credentials = format!("{}:{}", config.client_id, config.secret_key);

        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert(
            "Authorization".to_string(),
            format!("Basic {}", STANDARD.encode(credentials)),
        );

        info!(
            "ShuftiPro client initialized for host {} with client id {}",
            config.host,
            mask_value(&config.client_id)
        );

        Self {
            host: config.host,
            headers,
            builder: RequestBuilder::new(config.callback_url),
            transport,
            check_timeout: config.check_timeout,
        }
    }

    /// Headers sent with every request
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Submit one verification check for `customer`
    ///
    /// # Returns
    ///
    /// * `Ok(KycResult)` - The provider's decision, or `Unclear` with a status
    ///   check when the deadline passed first
    /// * `Err(KycError)` - Invalid customer data, transport failure, or an
    ///   error reported by the provider
    pub async fn check_customer(&self, customer: &CustomerData) -> Result<KycResult, KycError> {
        let request = self.builder.build(customer)?;
        let body = serde_json::to_vec(&request).map_err(KycError::Encode)?;
        let reference = request.reference;

        info!(
            reference = %reference,
            event = "kyc_check_submitted",
            "Submitting ShuftiPro verification request"
        );

        let transport = Arc::clone(&self.transport);
        let url = self.host.clone();
        let headers = self.headers.clone();
        let task_reference = reference.clone();

        // Owns all of its inputs; keeps running if the deadline passes.
        let submission = tokio::spawn(async move {
            let response = transport.post(&url, &headers, body).await?;
            debug!(
                reference = %task_reference,
                status = response.status,
                "ShuftiPro verification response received"
            );
            classify(response.status, &response.body)
                .map(|result| with_reference(result, &task_reference))
        });

        match tokio::time::timeout(self.check_timeout, submission).await {
            Ok(Ok(outcome)) => outcome,
            Ok(Err(join_error)) => Err(KycError::Task(join_error.to_string())),
            Err(_) => {
                warn!(
                    reference = %reference,
                    timeout_secs = self.check_timeout.as_secs(),
                    event = "kyc_check_timeout",
                    "ShuftiPro did not answer in time, status check required"
                );
                Ok(KycResult::pending(KycProvider::ShuftiPro, reference))
            }
        }
    }

    /// Look up the state of a previously submitted check
    pub async fn check_status(&self, reference_id: &str) -> Result<KycResult, KycError> {
        let request = RequestBuilder::build_status(reference_id)?;
        let body = serde_json::to_vec(&request).map_err(KycError::Encode)?;
        let url = format!("{}{}", self.host, STATUS_ENDPOINT);

        debug!(reference = reference_id, "Requesting ShuftiPro verification status");

        let response = self.transport.post(&url, &self.headers, body).await?;
        classify(response.status, &response.body).map(|result| with_reference(result, reference_id))
    }
}

impl ShuftiProClient<ReqwestTransport> {
    /// Create a client using the `reqwest` transport
    pub fn with_reqwest(config: ShuftiProConfig) -> Result<Self, KycError> {
        let transport = ReqwestTransport::new(config.request_timeout)?;
        Ok(Self::new(config, Arc::new(transport)))
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, KycError> {
        Self::with_reqwest(ShuftiProConfig::from_env()?)
    }
}

#[async_trait]
impl<T: HttpTransport> KycPlatform for ShuftiProClient<T> {
    type Error = KycError;

    async fn check_customer(&self, customer: &CustomerData) -> Result<KycResult, KycError> {
        ShuftiProClient::check_customer(self, customer).await
    }

    async fn check_status(&self, reference_id: &str) -> Result<KycResult, KycError> {
        ShuftiProClient::check_status(self, reference_id).await
    }

    fn provider(&self) -> KycProvider {
        KycProvider::ShuftiPro
    }
}

/// Fill in the reference of a status check when the provider omitted it
fn with_reference(mut result: KycResult, reference: &str) -> KycResult {
    if let Some(check) = result.status_check.as_mut() {
        if check.reference_id.is_empty() {
            check.reference_id = reference.to_string();
        }
    }
    result
}
