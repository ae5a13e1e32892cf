//! KYC Provider Module
//!
//! Identity verification clients implementing `kyc_core::KycPlatform`.
//!
//! ## Providers
//!
//! - **ShuftiPro**: document, face and address verification over the
//!   ShuftiPro REST API

pub mod shuftipro;

// Re-export commonly used types
pub use shuftipro::{ShuftiProClient, ShuftiProConfig};
