use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use serde_json::{Value, json};
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum PollError {
    /// Required input missing or of the wrong shape. `received` is the
    /// payload as submitted, `details` the per-field failures.
    #[error("Invalid request data: {message}")]
    Validation {
        message: String,
        received: Value,
        details: Value,
    },

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type PollResult<T> = Result<T, PollError>;

impl PollError {
    /// Validation failure echoing `received`, with field errors flattened to
    /// `{ field: [{ code, message }] }`.
    pub fn invalid(received: Value, errors: &ValidationErrors) -> Self {
        let details = errors
            .field_errors()
            .iter()
            .map(|(field, errors)| {
                let messages: Vec<Value> = errors
                    .iter()
                    .map(|err| json!({ "code": err.code, "message": err.message }))
                    .collect();
                (field.to_string(), Value::Array(messages))
            })
            .collect::<serde_json::Map<_, _>>();

        PollError::Validation {
            message: "Invalid request data".to_string(),
            received,
            details: Value::Object(details),
        }
    }
}

impl From<PollError> for AppError {
    fn from(err: PollError) -> Self {
        match err {
            PollError::Validation {
                message,
                received,
                details,
            } => AppError::Validation {
                message,
                details: json!({ "received": received, "fields": details }),
            },
            PollError::EventNotFound(id) => AppError::NotFound {
                message: "Event not found".to_string(),
                details: Some(json!({ "eventId": id })),
            },
            PollError::Database(msg) => AppError::InternalServerError(msg),
            PollError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for PollError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for PollError {
    fn from(err: mongodb::error::Error) -> Self {
        PollError::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_not_found_maps_to_404_with_event_id() {
        let app_error: AppError = PollError::EventNotFound("abc".to_string()).into();
        assert_eq!(app_error.status(), StatusCode::NOT_FOUND);
        match app_error {
            AppError::NotFound { details, .. } => {
                assert_eq!(details.unwrap()["eventId"], "abc");
            }
            other => panic!("unexpected mapping: {other:?}"),
        }
    }

    #[test]
    fn test_validation_maps_to_400_with_echo() {
        let err = PollError::Validation {
            message: "Invalid request data".to_string(),
            received: json!({ "name": "" }),
            details: json!({}),
        };
        let app_error: AppError = err.into();
        assert_eq!(app_error.status(), StatusCode::BAD_REQUEST);
        match app_error {
            AppError::Validation { details, .. } => {
                assert_eq!(details["received"], json!({ "name": "" }));
            }
            other => panic!("unexpected mapping: {other:?}"),
        }
    }

    #[test]
    fn test_store_failures_are_internal() {
        let app_error: AppError = PollError::Database("pool closed".to_string()).into();
        assert_eq!(app_error.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
