pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Standard error response body.
///
/// ```json
/// {
///   "code": 1001,
///   "error": "VALIDATION_ERROR",
///   "message": "Invalid request data",
///   "details": { "received": { "name": "", "dates": [] } }
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Machine-readable error identifier
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Structured context, e.g. the rejected payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Transport-level error taxonomy.
///
/// Domain crates convert their own errors into this type at the handler
/// boundary; it is the only place status codes are chosen.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    /// Malformed or missing input. `details` carries the echoed payload.
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        details: serde_json::Value,
    },

    #[error("Not Found: {message}")]
    NotFound {
        message: String,
        details: Option<serde_json::Value>,
    },

    #[error("Method Not Allowed: {0}")]
    MethodNotAllowed(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl AppError {
    /// HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::JsonExtractorRejection(e) => e.status(),
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> ErrorCode {
        match self {
            AppError::JsonExtractorRejection(_) => ErrorCode::JsonExtraction,
            AppError::Validation { .. } => ErrorCode::ValidationError,
            AppError::NotFound { .. } => ErrorCode::NotFound,
            AppError::MethodNotAllowed(_) => ErrorCode::MethodNotAllowed,
            AppError::InternalServerError(_) => ErrorCode::InternalError,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.error_code();

        let (message, details) = match self {
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!(error_code = code.code(), "JSON extraction error: {:?}", e);
                (e.body_text(), None)
            }
            AppError::Validation { message, details } => {
                tracing::info!(error_code = code.code(), %details, "Validation failed: {}", message);
                (message, Some(details))
            }
            AppError::NotFound { message, details } => {
                tracing::info!(error_code = code.code(), "Not found: {}", message);
                (message, details)
            }
            AppError::MethodNotAllowed(msg) => {
                tracing::info!(error_code = code.code(), "Method not allowed: {}", msg);
                (code.default_message().to_string(), None)
            }
            AppError::InternalServerError(msg) => {
                tracing::error!(error_code = code.code(), "Internal server error: {}", msg);
                (msg, None)
            }
        };

        let body = Json(ErrorResponse {
            code: code.code(),
            error: code.as_str().to_string(),
            message,
            details,
        });

        (status, body).into_response()
    }
}

/// Build an error response directly from a code and message.
pub fn error_response(status: StatusCode, message: String, error_code: ErrorCode) -> Response {
    let body = Json(ErrorResponse {
        code: error_code.code(),
        error: error_code.as_str().to_string(),
        message,
        details: None,
    });

    (status, body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use serde_json::json;

    async fn body_of(response: Response) -> ErrorResponse {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_error_echoes_details() {
        let err = AppError::Validation {
            message: "Invalid request data".to_string(),
            details: json!({ "received": { "name": null, "dates": [] } }),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_of(response).await;
        assert_eq!(body.error, "VALIDATION_ERROR");
        assert_eq!(body.code, 1001);
        assert_eq!(body.details.unwrap()["received"]["dates"], json!([]));
    }

    #[tokio::test]
    async fn test_not_found_status() {
        let err = AppError::NotFound {
            message: "Event not found".to_string(),
            details: Some(json!({ "eventId": "missing" })),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_of(response).await;
        assert_eq!(body.details.unwrap()["eventId"], "missing");
    }

    #[tokio::test]
    async fn test_internal_error_keeps_underlying_message() {
        let response =
            AppError::InternalServerError("connection pool closed".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_of(response).await;
        assert_eq!(body.message, "connection pool closed");
        assert!(body.details.is_none());
    }

    #[tokio::test]
    async fn test_error_response_helper() {
        let response = error_response(
            StatusCode::NOT_FOUND,
            "No route for /nope".to_string(),
            ErrorCode::NotFound,
        );
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_of(response).await.error, "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_method_not_allowed_uses_default_message() {
        let response = AppError::MethodNotAllowed("GET /events".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        let body = body_of(response).await;
        assert_eq!(body.error, "METHOD_NOT_ALLOWED");
        assert_eq!(body.message, "Method Not Allowed");
    }
}
