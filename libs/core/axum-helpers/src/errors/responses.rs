//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Bad Request - required input missing or malformed; payload echoed back",
    content_type = "application/json",
    example = json!({
        "code": 1001,
        "error": "VALIDATION_ERROR",
        "message": "Invalid request data",
        "details": {
            "received": { "name": "", "dates": [] }
        }
    })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Referenced resource not found",
    content_type = "application/json",
    example = json!({
        "code": 1004,
        "error": "NOT_FOUND",
        "message": "Event not found",
        "details": { "eventId": "65a1f0c2e4b0a1b2c3d4e5f6" }
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Method Not Allowed - endpoint only accepts POST",
    content_type = "application/json",
    example = json!({
        "code": 1005,
        "error": "METHOD_NOT_ALLOWED",
        "message": "Method Not Allowed"
    })
)]
pub struct MethodNotAllowedResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "code": 1500,
        "error": "INTERNAL_ERROR",
        "message": "server selection timeout"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);
