//! Wire types for the `{ "data", "page", "error" }` response envelope.
//!
//! Every field is optional on the wire. Producers omit keys that are absent
//! or at their zero value; consumers fill missing keys with defaults.

use std::fmt;

use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

fn is_zero<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

/// Cursor-style paging details carried next to `data`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageDetails {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub prev: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub next: String,
    #[serde(rename = "totalSize", default, skip_serializing_if = "is_zero")]
    pub total_size: i64,
}

/// An error condition reported by an API.
///
/// Doubles as the wire object under `"error"` and as a Rust error value, so
/// callers can match on [`ErrorInfo::code`] after a failed read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub code: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
}

impl ErrorInfo {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            code: i64::from(status.as_u16()),
            message: message.into(),
        }
    }

    /// Generic 401 response body.
    pub fn unauthorized() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "Unauthorized")
    }

    /// The code as a typed status, if it is a valid HTTP status.
    pub fn status(&self) -> Option<StatusCode> {
        u16::try_from(self.code)
            .ok()
            .and_then(|code| StatusCode::from_u16(code).ok())
    }

    /// Canonical reason phrase for the code, empty when unknown.
    pub fn status_text(&self) -> &'static str {
        self.status()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("")
    }
}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{} {}", self.code, self.status_text())
        } else {
            write!(
                f,
                "{} ({} {})",
                self.message,
                self.code,
                self.status_text()
            )
        }
    }
}

impl std::error::Error for ErrorInfo {}

/// Outbound envelope. Borrows its parts; built right before serialization.
#[derive(Serialize)]
pub struct Envelope<'a, T: ?Sized = serde_json::Value> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<&'a T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<&'a PageDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'a ErrorInfo>,
}

impl<'a, T: ?Sized> Envelope<'a, T> {
    pub fn data(data: &'a T, page: Option<&'a PageDetails>) -> Self {
        Self {
            data: Some(data),
            page,
            error: None,
        }
    }
}

impl<'a> Envelope<'a> {
    pub fn error(error: &'a ErrorInfo) -> Self {
        Self {
            data: None,
            page: None,
            error: Some(error),
        }
    }
}

/// Inbound envelope. `data` stays undecoded until the caller picks a type.
#[derive(Debug, Deserialize)]
pub(crate) struct RawEnvelope {
    #[serde(default)]
    pub data: Option<Box<RawValue>>,
    #[serde(default)]
    pub page: Option<PageDetails>,
    #[serde(default)]
    pub error: Option<ErrorInfo>,
}

/// Inbound envelope when only the error matters.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorOnlyEnvelope {
    #[serde(default)]
    pub error: Option<ErrorInfo>,
}
