//! Request bodies sent to the ShuftiPro API

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use kyc_core::domain::entities::{CustomerData, DocumentType};

use crate::KycError;

/// Verification mode accepting both image uploads and on-site capture
pub const VERIFICATION_MODE: &str = "any";

/// Documents accepted as proof of address
pub const ADDRESS_PROOF_TYPES: [&str; 5] = [
    "utility_bill",
    "bank_statement",
    "id_card",
    "passport",
    "driving_license",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Body of a verification submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRequest {
    pub reference: String,
    pub callback_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub verification_mode: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub face: Option<FaceService>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<DocumentService>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<AddressService>,
}

/// Body of a status lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRequest {
    pub reference: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceService {
    pub proof: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentService {
    pub proof: String,
    pub supported_types: Vec<String>,
    pub name: Name,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    pub document_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressService {
    /// Empty when the customer uploads the proof on the provider's page
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub proof: String,
    pub supported_types: Vec<String>,
    pub name: Name,
    pub full_address: String,
}

/// Maps customer data into ShuftiPro request bodies
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    callback_url: String,
}

impl RequestBuilder {
    pub fn new(callback_url: impl Into<String>) -> Self {
        Self {
            callback_url: callback_url.into(),
        }
    }

    /// Build a verification request for `customer`
    ///
    /// Uses the customer's reference when present and generates a new one
    /// otherwise. Fails with `KycError::Validation` when required identity
    /// fields are missing.
    pub fn build(&self, customer: &CustomerData) -> Result<VerificationRequest, KycError> {
        customer.validate()?;

        let reference = customer
            .reference
            .clone()
            .unwrap_or_else(generate_reference);

        let name = Name {
            first_name: customer.first_name.clone(),
            middle_name: customer.middle_name.clone(),
            last_name: customer.last_name.clone(),
        };

        let document = customer.document.as_ref().map(|doc| DocumentService {
            proof: encode_proof(&doc.image),
            supported_types: vec![document_type_name(doc.doc_type).to_string()],
            name: name.clone(),
            dob: customer.date_of_birth.map(format_date),
            document_number: doc.number.clone(),
            expiry_date: doc.valid_until.map(format_date),
            issue_date: doc.issued_date.map(format_date),
        });

        let face = customer.selfie.as_ref().map(|selfie| FaceService {
            proof: encode_proof(selfie),
        });

        let address = customer.address.as_ref().map(|addr| AddressService {
            proof: addr.proof.as_deref().map(encode_proof).unwrap_or_default(),
            supported_types: ADDRESS_PROOF_TYPES.iter().map(|t| t.to_string()).collect(),
            name: name.clone(),
            full_address: addr.full_address(),
        });

        Ok(VerificationRequest {
            reference,
            callback_url: self.callback_url.clone(),
            email: customer.email.clone(),
            country: customer.country_alpha2.clone(),
            language: customer.language.clone(),
            verification_mode: VERIFICATION_MODE.to_string(),
            face,
            document,
            address,
        })
    }

    /// Build a status lookup for a previously submitted reference
    pub fn build_status(reference_id: &str) -> Result<StatusRequest, KycError> {
        if reference_id.is_empty() {
            return Err(KycError::Usage(
                "reference id is required for a status check".to_string(),
            ));
        }

        Ok(StatusRequest {
            reference: reference_id.to_string(),
        })
    }
}

/// Provider name of a document type
pub fn document_type_name(doc_type: DocumentType) -> &'static str {
    match doc_type {
        DocumentType::Passport => "passport",
        DocumentType::IdCard => "id_card",
        DocumentType::DrivingLicense => "driving_license",
    }
}

fn generate_reference() -> String {
    Uuid::new_v4().simple().to_string()
}

fn encode_proof(image: &[u8]) -> String {
    STANDARD.encode(image)
}

fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
