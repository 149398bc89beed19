use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use jsonresp_core::{write_error, ErrorInfo, ResponseRecorder};

use crate::response::recorded;

/// Application-level error type for HTTP handlers.
///
/// Every variant renders as a `{ "error": { "code", "message" } }` envelope
/// with the matching status code.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// An error already in wire form, e.g. relayed from an upstream API.
    #[error(transparent)]
    Api(#[from] ErrorInfo),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized")]
    Unauthorized,

    /// Details are logged, never sent to the client.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    fn into_error_info(self) -> ErrorInfo {
        match self {
            AppError::Api(info) => info,
            AppError::NotFound(msg) => ErrorInfo::new(StatusCode::NOT_FOUND, msg),
            AppError::BadRequest(msg) => ErrorInfo::new(StatusCode::BAD_REQUEST, msg),
            AppError::Unauthorized => ErrorInfo::unauthorized(),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                ErrorInfo::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred",
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let info = self.into_error_info();
        let status = info.status().unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut rec = ResponseRecorder::new();
        if let Err(err) = write_error(&mut rec, &info.message, status) {
            tracing::error!(error = %err, "Failed to encode error envelope");
            return status.into_response();
        }
        recorded(rec)
    }
}
