//! Domain entities representing verification inputs and outcomes.

pub mod customer;
pub mod kyc_result;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use customer::{Address, CustomerData, DocumentType, IdentityDocument};
pub use kyc_result::{KycDetails, KycProvider, KycResult, KycStatus, StatusCheck};
