use async_trait::async_trait;

use crate::documents::{AnswerDocument, EventDocument};
use crate::error::PollResult;
use crate::models::{Answer, Event};

/// Persistence for events.
///
/// Lookups distinguish "absent" (`Ok(None)`) from a store failure (`Err`).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Store a new event and return its assigned identifier
    async fn insert_event(&self, document: EventDocument) -> PollResult<String>;

    /// Fetch an event; ids the store could never have issued are absent
    async fn find_event(&self, id: &str) -> PollResult<Option<Event>>;
}

/// Persistence for answers, scoped by event.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnswerRepository: Send + Sync {
    /// Store a new answer and return its assigned identifier
    async fn insert_answer(&self, document: AnswerDocument) -> PollResult<String>;

    /// All answers for an event in store order; empty when there are none
    async fn list_by_event(&self, event_id: &str) -> PollResult<Vec<Answer>>;
}
