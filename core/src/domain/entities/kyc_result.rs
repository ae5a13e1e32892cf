//! Normalized verification outcome shared by all provider clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// KYC providers known to the workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KycProvider {
    ShuftiPro,
}

impl std::fmt::Display for KycProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KycProvider::ShuftiPro => write!(f, "ShuftiPro"),
        }
    }
}

/// Verification decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum KycStatus {
    Approved,
    Declined,
    /// The outcome is not known yet; poll the provider later
    #[default]
    Unclear,
}

/// Descriptor telling the caller where and how to poll for the final result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCheck {
    pub provider: KycProvider,
    /// Reference to pass to `check_status`
    pub reference_id: String,
    pub last_check: DateTime<Utc>,
}

/// Additional information accompanying a decision
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KycDetails {
    pub reasons: Vec<String>,
}

/// Caller-facing outcome of a verification or status check.
///
/// A populated `status_check` always comes with `KycStatus::Unclear`. Non-200
/// provider answers never produce a result: provider clients report them as
/// errors carrying the HTTP status code.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KycResult {
    pub status: KycStatus,
    pub details: Option<KycDetails>,
    pub status_check: Option<StatusCheck>,
}

impl KycResult {
    pub fn approved() -> Self {
        Self {
            status: KycStatus::Approved,
            ..Default::default()
        }
    }

    pub fn declined(reasons: Vec<String>) -> Self {
        Self {
            status: KycStatus::Declined,
            details: (!reasons.is_empty()).then(|| KycDetails { reasons }),
            ..Default::default()
        }
    }

    /// Unclear result carrying a status check for `reference_id`, stamped now
    pub fn pending(provider: KycProvider, reference_id: impl Into<String>) -> Self {
        Self {
            status: KycStatus::Unclear,
            status_check: Some(StatusCheck {
                provider,
                reference_id: reference_id.into(),
                last_check: Utc::now(),
            }),
            ..Default::default()
        }
    }

    /// Whether the caller has to poll the provider for the final decision
    pub fn needs_status_check(&self) -> bool {
        self.status_check.is_some()
    }
}
