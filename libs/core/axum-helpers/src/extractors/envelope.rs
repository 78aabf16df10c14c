//! `{ "data": ... }` request and response wrapper.

use crate::errors::AppError;
use axum::{
    Json,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Value, json};
use utoipa::ToSchema;

/// Payload carried under a top-level `data` key.
///
/// As an extractor, a body without `data` (or with `data: null`) yields
/// `T::default()`, leaving the missing fields to the handler's validation.
/// A `data` value that is not a JSON object, or that cannot be read as `T`,
/// is rejected with a validation error echoing what was received.
///
/// As a response, the value is serialized as `{ "data": value }`.
///
/// ```ignore
/// async fn create(Envelope { data: input }: Envelope<CreateEventRequest>) -> Envelope<Created> {
///     // ...
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Envelope<T> {
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

impl<T, S> FromRequest<S> for Envelope<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(mut body) = Json::<Value>::from_request(req, state).await?;

        let data = match body.get_mut("data").map(Value::take) {
            None | Some(Value::Null) => return Ok(Self::new(T::default())),
            Some(data @ Value::Object(_)) => data,
            Some(data) => {
                return Err(AppError::Validation {
                    message: "Invalid request data".to_string(),
                    details: json!({ "received": data, "reason": "data must be a JSON object" }),
                });
            }
        };

        match serde_json::from_value::<T>(data.clone()) {
            Ok(value) => Ok(Self::new(value)),
            Err(e) => Err(AppError::Validation {
                message: "Invalid request data".to_string(),
                details: json!({ "received": data, "reason": e.to_string() }),
            }),
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
