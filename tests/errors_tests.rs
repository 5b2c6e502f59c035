use std::error::Error;

use axum::body::to_bytes;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use roadmap_relay::errors::RelayError;
use serde_json::Value;

async fn body_json(error: RelayError) -> (StatusCode, Value) {
    let response = error.into_response();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[test]
fn test_relay_error_implements_error_trait() {
    fn assert_error<T: Error>(_: &T) {}

    let error = RelayError::EmptyCompletion;
    assert_error(&error);
}

#[test]
fn test_relay_error_display() {
    let error = RelayError::UpstreamError("connection refused".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to access OpenAI API: connection refused"
    );

    let error = RelayError::ConfigurationMissing;
    assert_eq!(format!("{error}"), "OpenAI API key is not configured");
}

#[tokio::test]
async fn test_configuration_missing_has_no_details() {
    let (status, body) = body_json(RelayError::ConfigurationMissing).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "OpenAI API key is not configured");
    assert!(body.get("details").is_none());
}

#[tokio::test]
async fn test_every_variant_maps_to_500_with_label() {
    let cases = [
        (
            RelayError::UpstreamError("Invalid API key".to_string()),
            "OpenAI API Error",
            "Invalid API key",
        ),
        (
            RelayError::EmptyCompletion,
            "Failed to generate response",
            "No choices in response",
        ),
        (
            RelayError::MalformedCompletion("expected value".to_string()),
            "Invalid response format",
            "expected value",
        ),
        (
            RelayError::InternalFault("boom".to_string()),
            "Internal server error",
            "boom",
        ),
    ];

    for (error, label, details) in cases {
        let (status, body) = body_json(error).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], label);
        assert_eq!(body["details"], details);
    }
}

#[test]
fn test_relay_error_from_conversions() {
    let parse_err = serde_json::from_str::<Value>("not json").unwrap_err();
    match RelayError::from(parse_err) {
        RelayError::MalformedCompletion(msg) => assert!(!msg.is_empty()),
        _ => panic!("Unexpected error type"),
    }

    #[allow(unused)]
    #[allow(clippy::items_after_statements)]
    fn _check_reqwest_conversion(err: reqwest::Error) -> RelayError {
        RelayError::from(err)
    }
}
