//! Customer data submitted for identity verification.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use kyc_shared::validation::validators;

use crate::errors::ValidationError;

/// Kind of identity document the customer provides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    Passport,
    IdCard,
    DrivingLicense,
}

/// Identity document with its scanned image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityDocument {
    /// Document kind
    pub doc_type: DocumentType,
    /// Document number as printed on the document
    pub number: String,
    /// Date the document was issued
    pub issued_date: Option<NaiveDate>,
    /// Date the document expires
    pub valid_until: Option<NaiveDate>,
    /// Raw image bytes (front side)
    pub image: Vec<u8>,
}

/// Residential address of the customer
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub postal_code: String,
    /// ISO 3166-1 alpha-2 country code
    pub country_alpha2: String,
    /// Image of a proof-of-address document (utility bill, bank statement)
    pub proof: Option<Vec<u8>>,
}

impl Address {
    /// Single-line representation, skipping empty parts
    pub fn full_address(&self) -> String {
        [
            self.street.as_str(),
            self.city.as_str(),
            self.postal_code.as_str(),
            self.country_alpha2.as_str(),
        ]
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }
}

/// Normalized customer data accepted by every KYC provider client
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CustomerData {
    /// Caller-chosen reference; a provider client generates one when absent
    pub reference: Option<String>,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub email: Option<String>,
    /// ISO 3166-1 alpha-2 country code
    pub country_alpha2: String,
    /// ISO 639-1 language code for provider-facing pages
    pub language: Option<String>,
    pub document: Option<IdentityDocument>,
    /// Selfie image bytes used for face verification
    pub selfie: Option<Vec<u8>>,
    pub address: Option<Address>,
}

impl CustomerData {
    /// Check that the fields every verification needs are present and well formed
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !validators::not_empty(&self.first_name) {
            return Err(ValidationError::RequiredField {
                field: "first_name".to_string(),
            });
        }
        if !validators::not_empty(&self.last_name) {
            return Err(ValidationError::RequiredField {
                field: "last_name".to_string(),
            });
        }
        if !validators::not_empty(&self.country_alpha2) {
            return Err(ValidationError::RequiredField {
                field: "country_alpha2".to_string(),
            });
        }
        if !validators::is_country_alpha2(&self.country_alpha2) {
            return Err(ValidationError::InvalidFormat {
                field: "country_alpha2".to_string(),
            });
        }
        if let Some(email) = &self.email {
            if !validators::is_valid_email(email) {
                return Err(ValidationError::InvalidFormat {
                    field: "email".to_string(),
                });
            }
        }
        if let Some(document) = &self.document {
            if !validators::not_empty(&document.number) {
                return Err(ValidationError::RequiredField {
                    field: "document.number".to_string(),
                });
            }
            if document.image.is_empty() {
                return Err(ValidationError::RequiredField {
                    field: "document.image".to_string(),
                });
            }
        }
        if let Some(reference) = &self.reference {
            if !validators::not_empty(reference) || !validators::length_between(reference, 1, 250) {
                return Err(ValidationError::InvalidFormat {
                    field: "reference".to_string(),
                });
            }
        }
        if self.document.is_none() && self.selfie.is_none() && self.address.is_none() {
            return Err(ValidationError::NoVerificationService);
        }

        Ok(())
    }

    /// First, middle and last name joined by single spaces
    pub fn full_name(&self) -> String {
        [
            Some(self.first_name.as_str()),
            self.middle_name.as_deref(),
            Some(self.last_name.as_str()),
        ]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }
}
