//! Unit tests for the ShuftiPro client

use chrono::NaiveDate;

use kyc_core::domain::entities::{Address, CustomerData, DocumentType, IdentityDocument};

use super::config::ShuftiProConfig;

mod response_tests;

pub(super) const CALLBACK_URL: &str = "https://example.com/kyc/callback";

pub(super) fn test_config() -> ShuftiProConfig {
    ShuftiProConfig::new(
        "https://api.shuftipro.test/",
        "client-id",
        "secret-key",
        CALLBACK_URL,
    )
}

pub(super) fn sample_customer() -> CustomerData {
    CustomerData {
        reference: Some("ref-0001".to_string()),
        first_name: "Jane".to_string(),
        middle_name: Some("Ann".to_string()),
        last_name: "Doe".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 5, 17),
        email: Some("jane.doe@example.com".to_string()),
        country_alpha2: "GB".to_string(),
        language: Some("EN".to_string()),
        document: Some(IdentityDocument {
            doc_type: DocumentType::Passport,
            number: "123456789".to_string(),
            issued_date: NaiveDate::from_ymd_opt(2015, 1, 2),
            valid_until: NaiveDate::from_ymd_opt(2025, 1, 2),
            image: vec![0xFF, 0xD8, 0xFF],
        }),
        selfie: Some(b"selfie".to_vec()),
        address: Some(Address {
            street: "1 High Street".to_string(),
            city: "London".to_string(),
            postal_code: "SW1A 1AA".to_string(),
            country_alpha2: "GB".to_string(),
            proof: None,
        }),
    }
}
