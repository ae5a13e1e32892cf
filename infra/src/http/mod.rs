//! HTTP Transport Module
//!
//! Provider clients talk to their APIs through the `HttpTransport` trait, a
//! single POST-with-headers primitive. Keeping the trait this narrow lets the
//! clients be tested against `MockHttpTransport` without a network.
//!
//! ## Implementations
//!
//! - **ReqwestTransport**: production transport on top of `reqwest`
//! - **MockHttpTransport**: canned responses, delays and failures for tests

use async_trait::async_trait;
use std::collections::BTreeMap;

use crate::KycError;

pub mod mock_transport;
pub mod reqwest_transport;

pub use mock_transport::{MockHttpTransport, RecordedRequest};
pub use reqwest_transport::ReqwestTransport;

/// Header name to value mapping sent with every request
pub type Headers = BTreeMap<String, String>;

/// Raw answer of the remote service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body bytes
    pub body: Vec<u8>,
}

/// POST-with-headers transport
///
/// Implementations must be shareable across tasks: provider clients hand an
/// `Arc` of the transport to background submissions.
#[async_trait]
pub trait HttpTransport: Send + Sync + 'static {
    /// Send `body` to `url` with `headers`
    ///
    /// # Returns
    ///
    /// * `Ok(HttpResponse)` - Any answer from the remote side, whatever its status
    /// * `Err(KycError::Transport)` - If no answer could be obtained
    async fn post(&self, url: &str, headers: &Headers, body: Vec<u8>) -> Result<HttpResponse, KycError>;
}
