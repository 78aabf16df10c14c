use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::instrument;

use crate::documents::{AnswerDocument, EventDocument};
use crate::error::PollResult;
use crate::models::{Answer, Event};
use crate::repository::{AnswerRepository, EventRepository};

/// In-process store implementing both repositories.
///
/// Clones share the same data. Ids are ObjectId hex strings and are looked up
/// by parsed ObjectId, as with MongoDB. Answers are returned in insertion order.
#[derive(Clone, Default)]
pub struct MemoryPollStore {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Default)]
struct Inner {
    events: HashMap<ObjectId, Event>,
    answers: Vec<Answer>,
}

impl MemoryPollStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn event_count(&self) -> usize {
        self.inner.read().await.events.len()
    }

    pub async fn answer_count(&self) -> usize {
        self.inner.read().await.answers.len()
    }
}

#[async_trait]
impl EventRepository for MemoryPollStore {
    #[instrument(skip(self, document), fields(event_name = %document.name))]
    async fn insert_event(&self, mut document: EventDocument) -> PollResult<String> {
        let oid = ObjectId::new();
        document.id = Some(oid);
        let event = Event::from(document);

        self.inner
            .write()
            .await
            .events
            .insert(oid, event);
        Ok(oid.to_hex())
    }

    #[instrument(skip(self))]
    async fn find_event(&self, id: &str) -> PollResult<Option<Event>> {
        let Ok(oid) = ObjectId::parse_str(id) else {
            return Ok(None);
        };
        Ok(self.inner.read().await.events.get(&oid).cloned())
    }
}

#[async_trait]
impl AnswerRepository for MemoryPollStore {
    #[instrument(skip(self, document), fields(event_id = %document.event_id))]
    async fn insert_answer(&self, mut document: AnswerDocument) -> PollResult<String> {
        let oid = ObjectId::new();
        document.id = Some(oid);

        self.inner.write().await.answers.push(Answer::from(document));
        Ok(oid.to_hex())
    }

    #[instrument(skip(self))]
    async fn list_by_event(&self, event_id: &str) -> PollResult<Vec<Answer>> {
        let inner = self.inner.read().await;
        Ok(inner
            .answers
            .iter()
            .filter(|answer| answer.event_id == event_id)
            .cloned()
            .collect())
    }
}
