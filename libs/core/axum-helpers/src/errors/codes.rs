//! Type-safe error codes for API responses.
//!
//! Each code carries a string identifier for clients (e.g. "VALIDATION_ERROR"),
//! an integer for logs and dashboards (e.g. 1001), and a default message.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::ValidationError;
//! assert_eq!(code.as_str(), "VALIDATION_ERROR");
//! assert_eq!(code.code(), 1001);
//! assert_eq!(code.default_message(), "Invalid request data");
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Required input missing or of the wrong shape
    ValidationError,

    /// Request body could not be read as JSON
    JsonExtraction,

    /// Referenced resource does not exist
    NotFound,

    /// HTTP verb not accepted by the endpoint
    MethodNotAllowed,

    // Server errors (1500-1599)
    /// Store failure or unexpected error
    InternalError,
}

impl ErrorCode {
    /// SCREAMING_SNAKE_CASE identifier for programmatic handling by clients.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::JsonExtraction => "JSON_EXTRACTION",
            Self::NotFound => "NOT_FOUND",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Integer code used in structured logs.
    ///
    /// - 1000-1499: client errors
    /// - 1500-1599: server errors
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::JsonExtraction => 1003,
            Self::NotFound => 1004,
            Self::MethodNotAllowed => 1005,
            Self::InternalError => 1500,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Invalid request data",
            Self::JsonExtraction => "Failed to parse request body",
            Self::NotFound => "Resource not found",
            Self::MethodNotAllowed => "Method Not Allowed",
            Self::InternalError => "Internal Server Error",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_string_representation() {
        assert_eq!(ErrorCode::ValidationError.as_str(), "VALIDATION_ERROR");
        assert_eq!(ErrorCode::MethodNotAllowed.as_str(), "METHOD_NOT_ALLOWED");
        assert_eq!(ErrorCode::InternalError.to_string(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_error_code_ranges() {
        for code in [
            ErrorCode::ValidationError,
            ErrorCode::JsonExtraction,
            ErrorCode::NotFound,
            ErrorCode::MethodNotAllowed,
        ] {
            assert!((1000..1500).contains(&code.code()), "{code} is a client error");
        }
        assert!(ErrorCode::InternalError.code() >= 1500);
    }

    #[test]
    fn test_error_code_serde_matches_as_str() {
        let json = serde_json::to_string(&ErrorCode::MethodNotAllowed).unwrap();
        assert_eq!(json, "\"METHOD_NOT_ALLOWED\"");

        let code: ErrorCode = serde_json::from_str("\"NOT_FOUND\"").unwrap();
        assert_eq!(code, ErrorCode::NotFound);
    }
}
