//! Domain layer containing the customer and verification result entities.

pub mod entities;

// Re-export commonly used domain types
pub use entities::*;
