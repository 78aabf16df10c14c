//! Stored document shapes and their conversions to and from records.
//!
//! Dates and timestamps stay opaque ISO-8601 strings in both directions.

use chrono::{SecondsFormat, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::models::{Answer, Availability, Event, NewAnswer, NewEvent};

/// `events` collection document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub dates: Vec<String>,
    pub created_at: String,
}

/// `answers` collection document, linked to its event by `eventId`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub event_id: String,
    pub user_name: String,
    pub availability: Availability,
    pub created_at: String,
    pub updated_at: String,
}

/// Current time as an ISO-8601 UTC string with millisecond precision.
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl From<EventDocument> for Event {
    fn from(doc: EventDocument) -> Self {
        Self {
            id: doc.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            name: doc.name,
            dates: doc.dates,
            created_at: doc.created_at,
        }
    }
}

/// Stamps `createdAt` with the time of conversion.
impl From<NewEvent> for EventDocument {
    fn from(event: NewEvent) -> Self {
        Self {
            id: None,
            name: event.name,
            dates: event.dates,
            created_at: timestamp_now(),
        }
    }
}

impl From<AnswerDocument> for Answer {
    fn from(doc: AnswerDocument) -> Self {
        Self {
            id: doc.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            event_id: doc.event_id,
            user_name: doc.user_name,
            availability: doc.availability,
            created_at: doc.created_at,
            updated_at: doc.updated_at,
        }
    }
}

/// Stamps `createdAt` and `updatedAt` with one shared timestamp.
impl From<NewAnswer> for AnswerDocument {
    fn from(answer: NewAnswer) -> Self {
        let now = timestamp_now();
        Self {
            id: None,
            event_id: answer.event_id,
            user_name: answer.user_name,
            availability: answer.availability,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn test_timestamp_is_iso8601_utc_millis() {
        let ts = timestamp_now();
        assert!(ts.ends_with('Z'));
        assert_eq!(ts.len(), "2025-01-10T00:00:00.000Z".len());
        assert!(DateTime::parse_from_rfc3339(&ts).is_ok());
    }

    #[test]
    fn test_event_document_to_record_copies_fields() {
        let oid = ObjectId::new();
        let doc = EventDocument {
            id: Some(oid),
            name: "Team Sync".to_string(),
            dates: vec!["2025-01-11".to_string(), "2025-01-10".to_string()],
            created_at: "not even a timestamp".to_string(),
        };

        let event = Event::from(doc.clone());
        assert_eq!(event.id, oid.to_hex());
        assert_eq!(event.dates, doc.dates);
        assert_eq!(event.created_at, "not even a timestamp");
    }

    #[test]
    fn test_new_event_document_is_stamped() {
        let before = Utc::now();
        let doc = EventDocument::from(NewEvent {
            name: "Team Sync".to_string(),
            dates: vec!["2025-01-10T00:00:00.000Z".to_string()],
        });

        assert!(doc.id.is_none());
        let created = DateTime::parse_from_rfc3339(&doc.created_at).unwrap();
        assert!(created.timestamp_millis() >= before.timestamp_millis());
    }

    #[test]
    fn test_new_answer_document_has_equal_timestamps() {
        let doc = AnswerDocument::from(NewAnswer {
            event_id: "E1".to_string(),
            user_name: "Alice".to_string(),
            availability: Availability::from([("2025-01-10".to_string(), "yes".to_string())]),
        });
        assert_eq!(doc.created_at, doc.updated_at);
        assert_eq!(doc.availability["2025-01-10"], "yes");
    }

    #[test]
    fn test_answer_document_to_record_copies_fields() {
        let oid = ObjectId::new();
        let doc = AnswerDocument {
            id: Some(oid),
            event_id: "E1".to_string(),
            user_name: "Alice".to_string(),
            availability: Availability::new(),
            created_at: "2025-01-01T00:00:00.000Z".to_string(),
            updated_at: "2025-01-01T00:00:00.000Z".to_string(),
        };
        let answer = Answer::from(doc);
        assert_eq!(answer.id, oid.to_hex());
        assert_eq!(answer.event_id, "E1");
        assert_eq!(answer.created_at, answer.updated_at);
    }

    #[test]
    fn test_document_field_names_are_camel_case() {
        let doc = AnswerDocument::from(NewAnswer {
            event_id: "E1".to_string(),
            user_name: "Alice".to_string(),
            availability: Availability::new(),
        });
        let value = serde_json::to_value(&doc).unwrap();
        assert!(value.get("eventId").is_some());
        assert!(value.get("userName").is_some());
        assert!(value.get("updatedAt").is_some());
        assert!(value.get("_id").is_none());
    }
}
