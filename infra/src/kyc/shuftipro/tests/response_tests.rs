//! Unit tests for response classification

use serde_json::json;

use kyc_core::domain::entities::{KycProvider, KycStatus};

use crate::kyc::shuftipro::error::ProviderError;
use crate::kyc::shuftipro::response::{
    classify, describe_error, describe_event, ErrorField, ProviderResponse,
};
use crate::KycError;

fn body(value: serde_json::Value) -> Vec<u8> {
    value.to_string().into_bytes()
}

#[test]
fn test_accepted_event_is_approved() {
    let result = classify(
        200,
        &body(json!({"reference": "ref-1", "event": "verification.accepted", "error": ""})),
    )
    .unwrap();

    assert_eq!(result.status, KycStatus::Approved);
    assert!(result.status_check.is_none());
}

#[test]
fn test_declined_event_carries_reason() {
    let result = classify(
        200,
        &body(json!({
            "reference": "ref-1",
            "event": "verification.declined",
            "declined_reason": "Face could not be verified"
        })),
    )
    .unwrap();

    assert_eq!(result.status, KycStatus::Declined);
    assert_eq!(result.details.unwrap().reasons, vec!["Face could not be verified"]);
}

#[test]
fn test_pending_event_requires_status_check() {
    let result = classify(200, &body(json!({"reference": "ref-7", "event": "request.pending"}))).unwrap();

    assert_eq!(result.status, KycStatus::Unclear);
    let check = result.status_check.expect("status check");
    assert_eq!(check.provider, KycProvider::ShuftiPro);
    assert_eq!(check.reference_id, "ref-7");
}

#[test]
fn test_other_events_are_unclear_with_description() {
    let result = classify(200, &body(json!({"event": "verification.cancelled"}))).unwrap();

    assert_eq!(result.status, KycStatus::Unclear);
    assert!(result.status_check.is_none());
    assert_eq!(
        result.details.unwrap().reasons,
        vec!["Request is cancelled by the user"]
    );
}

#[test]
fn test_structured_error_is_rendered() {
    let err = classify(422, &body(json!({"error": {"key": "invalid_image"}}))).unwrap_err();

    assert!(matches!(err, KycError::Provider { status_code: 422, .. }));
    assert_eq!(err.to_string(), "key: 'invalid_image'");
    assert_eq!(err.error_code(), Some("422".to_string()));
}

#[test]
fn test_structured_error_renders_fields_in_order() {
    let err = classify(
        400,
        &body(json!({
            "event": "request.invalid",
            "error": {"message": "Reference must be unique", "service": "", "key": "reference"}
        })),
    )
    .unwrap_err();

    assert_eq!(err.to_string(), "key: 'reference' | message: 'Reference must be unique'");
}

#[test]
fn test_missing_error_object_describes_event() {
    let err = classify(400, &body(json!({"event": "request.invalid", "error": ""}))).unwrap_err();

    assert!(matches!(err, KycError::DescribedEvent { status_code: 400, .. }));
    assert_eq!(
        err.to_string(),
        "Request parameters provided in request are invalid: check the error code in the result"
    );

    let err = classify(401, &body(json!({"event": "request.unauthorized", "error": null}))).unwrap_err();
    assert!(err.to_string().starts_with("Request is unauthorized"));
    assert_eq!(err.error_code(), Some("401".to_string()));
}

#[test]
fn test_unknown_event_description_falls_back() {
    let err = classify(500, &body(json!({"event": "mystery.event"}))).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unknown provider event 'mystery.event': check the error code in the result"
    );

    let err = classify(500, &body(json!({}))).unwrap_err();
    assert!(err.to_string().ends_with(": check the error code in the result"));
    assert!(!describe_event("").is_empty());
}

#[test]
fn test_empty_or_malformed_error_object_is_format_error() {
    let err = classify(500, &body(json!({"event": "request.invalid", "error": {}}))).unwrap_err();
    assert!(matches!(err, KycError::Format));

    let err = classify(500, &body(json!({"error": {"key": 5}}))).unwrap_err();
    assert!(matches!(err, KycError::Format));
    assert_eq!(
        err.to_string(),
        "unexpected format of the returned error: please, report to developers"
    );
}

#[test]
fn test_undecodable_body_is_decode_error() {
    let err = classify(200, b"not json").unwrap_err();
    assert!(matches!(err, KycError::Decode { status_code: 200, .. }));
    assert_eq!(err.error_code(), None);

    let err = classify(502, b"<html>Bad Gateway</html>").unwrap_err();
    assert!(matches!(err, KycError::Decode { .. }));
    assert_eq!(err.error_code(), Some("502".to_string()));

    let err = classify(200, &body(json!({"event": 42}))).unwrap_err();
    assert!(matches!(err, KycError::Decode { .. }));
}

#[test]
fn test_describe_error() {
    let err = describe_error(&body(json!({"error": {"message": "Invalid reference"}}))).unwrap();
    assert_eq!(err.to_string(), "message: 'Invalid reference'");

    let result = describe_error(&body(json!({"error": {"service": "", "key": "", "message": ""}})));
    assert!(matches!(result, Err(KycError::Format)));

    assert!(matches!(describe_error(&body(json!({"error": ""}))), Err(KycError::Format)));
    assert!(matches!(describe_error(b"{"), Err(KycError::Format)));
}

#[test]
fn test_error_field_shapes() {
    let decode = |value: serde_json::Value| -> ErrorField {
        serde_json::from_value::<ProviderResponse>(value).unwrap().error
    };

    assert_eq!(decode(json!({})), ErrorField::Absent);
    assert_eq!(decode(json!({"error": ""})), ErrorField::Absent);
    assert_eq!(decode(json!({"error": null})), ErrorField::Absent);
    assert_eq!(decode(json!({"error": {"key": []}})), ErrorField::Malformed);
    assert_eq!(
        decode(json!({"error": {"service": "face"}})),
        ErrorField::Structured(ProviderError {
            service: Some("face".to_string()),
            key: None,
            message: None,
        })
    );
}
