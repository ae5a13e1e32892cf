//! `reqwest`-backed HTTP transport

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, error};

use super::{Headers, HttpResponse, HttpTransport};
use crate::KycError;

/// Production transport using a pooled `reqwest::Client`
#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport whose requests are abandoned after `request_timeout`
    pub fn new(request_timeout: Duration) -> Result<Self, KycError> {
        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| KycError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Wrap an already configured client
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post(&self, url: &str, headers: &Headers, body: Vec<u8>) -> Result<HttpResponse, KycError> {
        let mut request = self.client.post(url).body(body);
        for (name, value) in headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request.send().await.map_err(|e| {
            error!(url = url, error = %e, "HTTP request failed");
            KycError::Transport(e.to_string())
        })?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| KycError::Transport(format!("Failed to read response body: {}", e)))?;

        debug!(url = url, status = status, body_len = body.len(), "HTTP response received");

        Ok(HttpResponse {
            status,
            body: body.to_vec(),
        })
    }
}
