//! Example: submitting a verification check and polling its status
//!
//! Reads the `SHUFTIPRO_*` variables (and `.env` if present), then either
//! submits a document + selfie check or looks up an earlier reference.
//!
//! Run with:
//!   cargo run --example shuftipro_check -p kyc_infra -- submit <document.jpg> <selfie.jpg>
//!   cargo run --example shuftipro_check -p kyc_infra -- status <reference>

use kyc_core::domain::entities::{CustomerData, DocumentType, IdentityDocument, KycResult};
use kyc_shared::{init_tracing, Environment, LoggingConfig};

fn print_result(result: &KycResult) {
    println!("Status: {:?}", result.status);
    if let Some(details) = &result.details {
        for reason in &details.reasons {
            println!("  reason: {}", reason);
        }
    }
    if let Some(check) = &result.status_check {
        println!(
            "Decision pending at {}; poll again with reference '{}' (last check {})",
            check.provider, check.reference_id, check.last_check
        );
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenvy::dotenv().ok();
    init_tracing(&LoggingConfig::from_env())?;
    tracing::info!(environment = %Environment::from_env(), "Starting ShuftiPro example");

    let client = kyc_infra::initialize()?;
    let args: Vec<String> = std::env::args().skip(1).collect();

    let outcome = match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        ["submit", document, selfie] => {
            let customer = CustomerData {
                first_name: "Jane".to_string(),
                last_name: "Doe".to_string(),
                country_alpha2: "GB".to_string(),
                document: Some(IdentityDocument {
                    doc_type: DocumentType::Passport,
                    number: "123456789".to_string(),
                    issued_date: None,
                    valid_until: None,
                    image: std::fs::read(document)?,
                }),
                selfie: Some(std::fs::read(selfie)?),
                ..Default::default()
            };
            println!("Submitting verification check...");
            client.check_customer(&customer).await
        }
        ["status", reference] => {
            println!("Looking up status of '{}'...", reference);
            client.check_status(reference).await
        }
        _ => {
            eprintln!("usage: shuftipro_check submit <document> <selfie> | status <reference>");
            return Ok(());
        }
    };

    match outcome {
        Ok(result) => print_result(&result),
        Err(e) => match e.error_code() {
            Some(code) => println!("✗ ShuftiPro answered {}: {}", code, e),
            None => println!("✗ Check failed: {}", e),
        },
    }

    Ok(())
}
