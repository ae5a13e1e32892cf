//! Structured error reported by the ShuftiPro API

use serde::{Deserialize, Serialize};

/// Error object found in the `error` field of a ShuftiPro response
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProviderError {
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ProviderError {
    /// True when no field carries any text; such an error is a malformed payload
    pub fn is_empty(&self) -> bool {
        self.fields().next().is_none()
    }

    fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("service", self.service.as_deref()),
            ("key", self.key.as_deref()),
            ("message", self.message.as_deref()),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.filter(|v| !v.is_empty()).map(|v| (name, v)))
    }
}

/// Renders `service: '<s>' | key: '<k>' | message: '<m>'`, skipping empty fields.
impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (name, value)) in self.fields().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            write!(f, "{}: '{}'", name, value)?;
        }
        Ok(())
    }
}

impl std::error::Error for ProviderError {}
