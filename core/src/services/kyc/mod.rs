//! KYC platform interface implemented by provider clients

mod traits;

pub use traits::KycPlatform;
