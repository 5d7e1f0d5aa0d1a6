//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status, expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert a failure envelope: matching HTTP status, matching JSON `code`,
/// the exact `message`, and no `output_jpeg` key.
pub fn assert_error_envelope(response: &TestResponse, status: StatusCode, message: &str) {
    assert_status(response, status);

    let json: serde_json::Value = response.json();
    assert_eq!(
        json["code"].as_u64(),
        Some(status.as_u16() as u64),
        "Envelope code should match HTTP status. Full response: {}",
        response.text()
    );
    assert_eq!(
        json["message"].as_str(),
        Some(message),
        "Error messages are exact-match contract strings"
    );
    assert!(
        json.get("output_jpeg").is_none(),
        "Failure responses must not carry output_jpeg"
    );
}

/// Assert a success envelope and return the output_jpeg payload
pub fn assert_success_envelope(response: &TestResponse) -> String {
    assert_ok(response);

    let json: serde_json::Value = response.json();
    assert_eq!(json["code"], 200);
    assert_eq!(json["message"], "success");
    json["output_jpeg"]
        .as_str()
        .expect("Success response must carry output_jpeg")
        .to_string()
}
