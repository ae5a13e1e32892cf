//! Provider-facing service interfaces.

pub mod kyc;

// Re-export commonly used types
pub use kyc::KycPlatform;
