//! Mock HTTP Transport Implementation
//!
//! A programmable transport for development and testing. It answers every
//! request with the same status and body, optionally after a delay, and
//! records what was sent.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::{info, warn};

use super::{Headers, HttpResponse, HttpTransport};
use crate::KycError;

/// A request captured by `MockHttpTransport`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: Headers,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    /// Body decoded as JSON
    pub fn json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Mock transport for development and testing
///
/// This implementation:
/// - Returns a canned status and body
/// - Optionally sleeps before answering (`tokio::time`, so paused-clock tests
///   advance instantly)
/// - Optionally fails with a transport error
/// - Records every request and counts completed ones
#[derive(Clone)]
pub struct MockHttpTransport {
    status: u16,
    body: Vec<u8>,
    delay: Option<Duration>,
    failure: Option<String>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    completed: Arc<AtomicU64>,
}

impl MockHttpTransport {
    /// Answer every request with `status` and `body`
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
            delay: None,
            failure: None,
            requests: Arc::new(Mutex::new(Vec::new())),
            completed: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Answer every request with `status` and `body` serialized as JSON
    pub fn json(status: u16, body: &serde_json::Value) -> Self {
        Self::new(status, body.to_string())
    }

    /// Fail every request with a transport error
    pub fn failing(message: impl Into<String>) -> Self {
        let mut transport = Self::new(0, Vec::new());
        transport.failure = Some(message.into());
        transport
    }

    /// Wait `delay` before answering
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Requests received so far, in arrival order
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Number of requests received
    pub fn request_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    /// Number of requests that ran to completion (answered or failed)
    pub fn completed_count(&self) -> u64 {
        self.completed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn post(&self, url: &str, headers: &Headers, body: Vec<u8>) -> Result<HttpResponse, KycError> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(RecordedRequest {
                url: url.to_string(),
                headers: headers.clone(),
                body,
            });

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.completed.fetch_add(1, Ordering::SeqCst);

        if let Some(message) = &self.failure {
            warn!(target: "http_transport", url = url, "Mock transport simulating failure");
            return Err(KycError::Transport(message.clone()));
        }

        info!(
            target: "http_transport",
            transport = "mock",
            url = url,
            status = self.status,
            "Mock response returned"
        );

        Ok(HttpResponse {
            status: self.status,
            body: self.body.clone(),
        })
    }
}
