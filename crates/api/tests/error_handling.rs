//! Tests for `AppError` → HTTP response mapping.
//!
//! Each variant must produce the right status, a JSON content type, and an
//! `{ "error": { "code", "message" } }` body. No server is needed; these call
//! `IntoResponse` directly.

mod common;

use assert_matches::assert_matches;
use axum::http::{header::CONTENT_TYPE, StatusCode};
use axum::response::IntoResponse;
use common::{body_bytes, body_json};
use jsonresp_api::error::AppError;
use jsonresp_core::{read_error, read_response, ErrorInfo, JsonRespError};
use serde::de::IgnoredAny;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
    (status, body_json(response).await)
}

// ---------------------------------------------------------------------------
// Test: NotFound maps to 404 with the message in the envelope
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404() {
    let (status, json) = error_to_response(AppError::NotFound("no such project".into())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], 404);
    assert_eq!(json["error"]["message"], "no such project");
    assert!(json.get("data").is_none());
}

// ---------------------------------------------------------------------------
// Test: BadRequest maps to 400
// ---------------------------------------------------------------------------

#[tokio::test]
async fn bad_request_error_returns_400() {
    let (status, json) =
        error_to_response(AppError::BadRequest("invalid field value".into())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], 400);
    assert_eq!(json["error"]["message"], "invalid field value");
}

// ---------------------------------------------------------------------------
// Test: Unauthorized uses the shared 401 body
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unauthorized_error_returns_401() {
    let (status, json) = error_to_response(AppError::Unauthorized).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], 401);
    assert_eq!(json["error"]["message"], "Unauthorized");
}

// ---------------------------------------------------------------------------
// Test: InternalError maps to 500 and sanitizes the message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn internal_error_returns_500_and_sanitizes_message() {
    let err = AppError::InternalError("secret database credentials leaked".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], 500);

    let body_text = json.to_string();
    assert!(
        !body_text.contains("secret"),
        "Internal error response must not leak sensitive details"
    );
    assert_eq!(json["error"]["message"], "An internal error occurred");
}

// ---------------------------------------------------------------------------
// Test: a relayed ErrorInfo keeps its code and message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn api_error_is_relayed_verbatim() {
    let info = ErrorInfo::new(StatusCode::CONFLICT, "duplicate name");
    let response = AppError::from(info.clone()).into_response();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = body_bytes(response).await;
    assert_eq!(read_error(body.as_slice()), Some(info.clone()));

    let err = read_response::<IgnoredAny, _>(body.as_slice()).unwrap_err();
    assert_matches!(err, JsonRespError::Api(got) if got == info);
}

// ---------------------------------------------------------------------------
// Test: an ErrorInfo with an invalid code falls back to 500
// ---------------------------------------------------------------------------

#[tokio::test]
async fn api_error_with_invalid_code_returns_500() {
    let info = ErrorInfo {
        code: 0,
        message: "mystery".into(),
    };

    let (status, json) = error_to_response(AppError::Api(info)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], 500);
    assert_eq!(json["error"]["message"], "mystery");
}
