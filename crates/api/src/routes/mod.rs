use axum::http::Uri;
use axum::Router;

use crate::error::AppError;

pub mod health;

/// All demo routes. Unknown paths answer with a 404 error envelope.
pub fn router() -> Router {
    Router::new().merge(health::router()).fallback(not_found)
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
