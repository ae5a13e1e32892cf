//! Trait for KYC provider integration

use async_trait::async_trait;

use crate::domain::entities::{CustomerData, KycProvider, KycResult};

/// Interface every KYC provider client implements
///
/// Implementations include:
/// - ShuftiPro HTTP API
#[async_trait]
pub trait KycPlatform: Send + Sync {
    /// Error returned when the provider cannot be reached or its answer
    /// cannot be interpreted
    type Error: std::error::Error + Send + Sync + 'static;

    /// Submit one verification check for a customer
    ///
    /// # Returns
    ///
    /// * `Ok(KycResult)` - Decision, or an unclear result with a status check
    ///   when the provider did not answer in time
    /// * `Err(Self::Error)` - If the request could not be built or the
    ///   provider answered with an error
    async fn check_customer(&self, customer: &CustomerData) -> Result<KycResult, Self::Error>;

    /// Look up the current state of a previously submitted check
    async fn check_status(&self, reference_id: &str) -> Result<KycResult, Self::Error>;

    /// Get the provider this client talks to
    fn provider(&self) -> KycProvider;
}
