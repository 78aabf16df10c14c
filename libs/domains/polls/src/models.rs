use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::collections::BTreeMap;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::error::{PollError, PollResult};

/// Per-date responses, keyed by the date string as it appears in the event.
pub type Availability = BTreeMap<String, String>;

/// A named poll with an ordered list of candidate dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Store-assigned identifier
    #[schema(example = "65a1f0c2e4b0a1b2c3d4e5f6")]
    pub id: String,
    #[schema(example = "Team Sync")]
    pub name: String,
    /// ISO-8601 strings; order defines the grid columns
    #[schema(example = json!(["2025-01-10T00:00:00.000Z", "2025-01-11T00:00:00.000Z"]))]
    pub dates: Vec<String>,
    /// Set once when the event is accepted
    pub created_at: String,
}

/// One participant's availability for an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub id: String,
    pub event_id: String,
    #[schema(example = "Alice")]
    pub user_name: String,
    #[schema(example = json!({ "2025-01-10T00:00:00.000Z": "yes" }))]
    pub availability: Availability,
    pub created_at: String,
    /// Equal to `created_at`; answers are never edited
    pub updated_at: String,
}

/// Validated input for a new event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub name: String,
    pub dates: Vec<String>,
}

/// Validated input for a new answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAnswer {
    pub event_id: String,
    pub user_name: String,
    pub availability: Availability,
}

/// Create-event request as received.
///
/// Fields are kept as raw JSON so that a payload of the wrong shape can still
/// be echoed back in the validation error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct CreateEvent {
    #[validate(custom(function = "validate_non_empty_string"))]
    #[schema(value_type = String, example = "Team Sync")]
    pub name: Value,

    #[validate(custom(function = "validate_date_list"))]
    #[schema(value_type = Vec<String>, example = json!(["2025-01-10T00:00:00.000Z", "2025-01-11T00:00:00.000Z"]))]
    pub dates: Value,
}

impl CreateEvent {
    pub fn new(name: impl Into<String>, dates: Vec<String>) -> Self {
        Self {
            name: Value::String(name.into()),
            dates: Value::from(dates),
        }
    }

    /// Validate and convert into a [`NewEvent`].
    pub fn into_new_event(self) -> PollResult<NewEvent> {
        if let Err(errors) = self.validate() {
            return Err(PollError::invalid(self.echo(), &errors));
        }

        match (non_empty_str(&self.name), string_list(&self.dates)) {
            (Some(name), Some(dates)) => Ok(NewEvent {
                name: name.to_string(),
                dates,
            }),
            _ => Err(PollError::Internal(
                "validated event request could not be converted".to_string(),
            )),
        }
    }

    fn echo(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Submit-answer request as received. See [`CreateEvent`] for why fields are raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateAnswer {
    #[validate(custom(function = "validate_non_empty_string"))]
    #[schema(value_type = String, example = "65a1f0c2e4b0a1b2c3d4e5f6")]
    pub event_id: Value,

    #[validate(custom(function = "validate_non_empty_string"))]
    #[schema(value_type = String, example = "Alice")]
    pub user_name: Value,

    #[validate(custom(function = "validate_availability"))]
    #[schema(value_type = Object, example = json!({ "2025-01-10T00:00:00.000Z": "yes" }))]
    pub availability: Value,
}

impl CreateAnswer {
    pub fn new(
        event_id: impl Into<String>,
        user_name: impl Into<String>,
        availability: Availability,
    ) -> Self {
        let availability = availability
            .into_iter()
            .map(|(date, symbol)| (date, Value::String(symbol)))
            .collect::<Map<_, _>>();

        Self {
            event_id: Value::String(event_id.into()),
            user_name: Value::String(user_name.into()),
            availability: Value::Object(availability),
        }
    }

    /// Validate and convert into a [`NewAnswer`].
    pub fn into_new_answer(self) -> PollResult<NewAnswer> {
        if let Err(errors) = self.validate() {
            return Err(PollError::invalid(self.echo(), &errors));
        }

        match (
            non_empty_str(&self.event_id),
            non_empty_str(&self.user_name),
            string_map(&self.availability),
        ) {
            (Some(event_id), Some(user_name), Some(availability)) => Ok(NewAnswer {
                event_id: event_id.to_string(),
                user_name: user_name.to_string(),
                availability,
            }),
            _ => Err(PollError::Internal(
                "validated answer request could not be converted".to_string(),
            )),
        }
    }

    fn echo(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Identifier returned by both create operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Created {
    #[schema(example = "65a1f0c2e4b0a1b2c3d4e5f6")]
    pub id: String,
    #[schema(example = "Event created successfully")]
    pub message: String,
}

impl Created {
    pub fn new(id: String, message: &str) -> Self {
        Self {
            id,
            message: message.to_string(),
        }
    }
}

fn non_empty_str(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| !s.is_empty())
}

fn string_list(value: &Value) -> Option<Vec<String>> {
    value
        .as_array()
        .filter(|items| !items.is_empty())?
        .iter()
        .map(|item| item.as_str().map(str::to_string))
        .collect()
}

fn string_map(value: &Value) -> Option<Availability> {
    value
        .as_object()?
        .iter()
        .map(|(key, v)| v.as_str().map(|s| (key.clone(), s.to_string())))
        .collect()
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

fn validate_non_empty_string(value: &Value) -> Result<(), ValidationError> {
    match value {
        Value::Null => Err(invalid("required", "is required")),
        Value::String(s) if s.is_empty() => Err(invalid("empty", "must not be empty")),
        Value::String(_) => Ok(()),
        _ => Err(invalid("type", "must be a string")),
    }
}

fn validate_date_list(value: &Value) -> Result<(), ValidationError> {
    match value {
        Value::Null => Err(invalid("required", "is required")),
        Value::Array(items) if items.is_empty() => {
            Err(invalid("empty", "must contain at least one date"))
        }
        Value::Array(items) if items.iter().all(Value::is_string) => Ok(()),
        Value::Array(_) => Err(invalid("type", "dates must be strings")),
        _ => Err(invalid("type", "must be an array of dates")),
    }
}

fn validate_availability(value: &Value) -> Result<(), ValidationError> {
    match value {
        Value::Null => Err(invalid("required", "is required")),
        Value::Object(map) if map.values().all(Value::is_string) => Ok(()),
        Value::Object(_) => Err(invalid("type", "availability values must be strings")),
        _ => Err(invalid("type", "must be an object keyed by date")),
    }
}
