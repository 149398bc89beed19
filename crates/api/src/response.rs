//! axum response type for the `{ "data", "page" }` envelope.
//!
//! Handlers return [`JsonResponse`] instead of ad-hoc
//! `Json(json!({ "data": ... }))` so every success body goes through the
//! same codec as clients use to read it.

use axum::body::Body;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use jsonresp_core::{write_response_page, PageDetails, ResponseRecorder};
use serde::Serialize;

use crate::error::AppError;

/// Success envelope with an optional page and a status (default `200 OK`).
///
/// # Example
///
/// ```ignore
/// Ok(JsonResponse::ok(items).with_page(page))
/// ```
#[derive(Debug, Clone)]
pub struct JsonResponse<T> {
    pub data: T,
    pub page: Option<PageDetails>,
    pub status: StatusCode,
}

impl<T: Serialize> JsonResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            data,
            page: None,
            status: StatusCode::OK,
        }
    }

    pub fn created(data: T) -> Self {
        Self::ok(data).with_status(StatusCode::CREATED)
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    pub fn with_page(mut self, page: PageDetails) -> Self {
        self.page = Some(page);
        self
    }
}

impl<T: Serialize> IntoResponse for JsonResponse<T> {
    fn into_response(self) -> Response {
        let mut rec = ResponseRecorder::new();
        match write_response_page(&mut rec, &self.data, self.page.as_ref(), self.status) {
            Ok(()) => recorded(rec),
            Err(err) => AppError::InternalError(err.to_string()).into_response(),
        }
    }
}

/// Turn whatever was written to a recorder into an axum response.
pub fn recorded(rec: ResponseRecorder) -> Response {
    rec.into_response().map(Body::from)
}
