use axum::{
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};

use super::{AppError, ErrorCode, error_response};

/// Fallback for unknown paths.
pub async fn not_found(uri: Uri) -> Response {
    error_response(
        StatusCode::NOT_FOUND,
        format!("No route for {}", uri.path()),
        ErrorCode::NotFound,
    )
}

/// Method fallback for write-only endpoints.
///
/// Attach with `post(handler).fallback(method_not_allowed)` so the request is
/// rejected before any extractor or validation runs.
pub async fn method_not_allowed(method: Method, uri: Uri) -> Response {
    AppError::MethodNotAllowed(format!("{} {}", method, uri.path())).into_response()
}
