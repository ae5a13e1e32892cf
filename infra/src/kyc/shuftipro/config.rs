//! ShuftiPro client configuration

use std::time::Duration;

use kyc_shared::validation::validators;

use super::client::CHECK_CUSTOMER_TIMEOUT;
use crate::KycError;

/// Production API host
pub const DEFAULT_HOST: &str = "https://api.shuftipro.com/";

/// Default lifetime of a single HTTP request, bounding background submissions
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

/// ShuftiPro client configuration
#[derive(Debug, Clone)]
pub struct ShuftiProConfig {
    /// API host; always ends with '/' so endpoints can be appended
    pub host: String,
    /// ShuftiPro client id
    pub client_id: String,
    /// ShuftiPro secret key
    pub secret_key: String,
    /// URL the provider notifies when a verification completes
    pub callback_url: String,
    /// Deadline for a verification check before it is reported as unclear
    pub check_timeout: Duration,
    /// Timeout for a single HTTP request
    pub request_timeout: Duration,
}

impl ShuftiProConfig {
    /// Create a configuration with default timeouts
    pub fn new(
        host: impl Into<String>,
        client_id: impl Into<String>,
        secret_key: impl Into<String>,
        callback_url: impl Into<String>,
    ) -> Self {
        Self {
            host: normalize_host(host.into()),
            client_id: client_id.into(),
            secret_key: secret_key.into(),
            callback_url: callback_url.into(),
            check_timeout: CHECK_CUSTOMER_TIMEOUT,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    /// Override the verification check deadline
    pub fn with_check_timeout(mut self, timeout: Duration) -> Self {
        self.check_timeout = timeout;
        self
    }

    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, KycError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from any key lookup (environment, file, map)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, KycError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| validators::not_empty(value))
                .ok_or_else(|| KycError::Config(format!("{} not set", key)))
        };

        let host = lookup("SHUFTIPRO_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        if !validators::is_valid_url(&host) {
            return Err(KycError::Config(
                "SHUFTIPRO_HOST must be an http(s) URL".to_string(),
            ));
        }

        let client_id = required("SHUFTIPRO_CLIENT_ID")?;
        let secret_key = required("SHUFTIPRO_SECRET_KEY")?;

        let callback_url = lookup("SHUFTIPRO_CALLBACK_URL").unwrap_or_default();
        if !callback_url.is_empty() && !validators::is_valid_url(&callback_url) {
            return Err(KycError::Config(
                "SHUFTIPRO_CALLBACK_URL must be an http(s) URL".to_string(),
            ));
        }

        let seconds = |key: &str, default: u64| match lookup(key).filter(|v| validators::not_empty(v)) {
            None => Ok(Duration::from_secs(default)),
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
                _ => Err(KycError::Config(format!(
                    "{} must be a positive number of seconds, got '{}'",
                    key, raw
                ))),
            },
        };

        Ok(Self {
            host: normalize_host(host),
            client_id,
            secret_key,
            callback_url,
            check_timeout: seconds("SHUFTIPRO_CHECK_TIMEOUT_SECS", CHECK_CUSTOMER_TIMEOUT.as_secs())?,
            request_timeout: seconds("SHUFTIPRO_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?,
        })
    }
}

fn normalize_host(mut host: String) -> String {
    if !host.ends_with('/') {
        host.push('/');
    }
    host
}
