use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database, IndexModel};
use tracing::instrument;

use crate::documents::{AnswerDocument, EventDocument};
use crate::error::{PollError, PollResult};
use crate::models::{Answer, Event};
use crate::repository::{AnswerRepository, EventRepository};

pub const EVENTS_COLLECTION: &str = "events";
pub const ANSWERS_COLLECTION: &str = "answers";

/// MongoDB-backed event storage (`events` collection)
#[derive(Clone)]
pub struct MongoEventRepository {
    collection: Collection<EventDocument>,
}

impl MongoEventRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(EVENTS_COLLECTION),
        }
    }
}

/// MongoDB-backed answer storage (`answers` collection, indexed by `eventId`)
#[derive(Clone)]
pub struct MongoAnswerRepository {
    collection: Collection<AnswerDocument>,
}

impl MongoAnswerRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(ANSWERS_COLLECTION),
        }
    }

    /// Create the `eventId` index used by [`AnswerRepository::list_by_event`].
    pub async fn create_indexes(&self) -> PollResult<()> {
        let index = IndexModel::builder().keys(doc! { "eventId": 1 }).build();
        self.collection.create_index(index).await?;
        Ok(())
    }
}

fn inserted_hex(id: mongodb::bson::Bson) -> PollResult<String> {
    id.as_object_id()
        .map(|oid| oid.to_hex())
        .ok_or_else(|| PollError::Internal(format!("unexpected inserted id: {id}")))
}

#[async_trait]
impl EventRepository for MongoEventRepository {
    #[instrument(skip(self, document), fields(event_name = %document.name))]
    async fn insert_event(&self, document: EventDocument) -> PollResult<String> {
        let result = self.collection.insert_one(&document).await?;
        inserted_hex(result.inserted_id)
    }

    #[instrument(skip(self))]
    async fn find_event(&self, id: &str) -> PollResult<Option<Event>> {
        let Ok(oid) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let document = self.collection.find_one(doc! { "_id": oid }).await?;
        Ok(document.map(Event::from))
    }
}

#[async_trait]
impl AnswerRepository for MongoAnswerRepository {
    #[instrument(skip(self, document), fields(event_id = %document.event_id))]
    async fn insert_answer(&self, document: AnswerDocument) -> PollResult<String> {
        let result = self.collection.insert_one(&document).await?;
        inserted_hex(result.inserted_id)
    }

    #[instrument(skip(self))]
    async fn list_by_event(&self, event_id: &str) -> PollResult<Vec<Answer>> {
        let cursor = self.collection.find(doc! { "eventId": event_id }).await?;
        let documents: Vec<AnswerDocument> = cursor.try_collect().await?;
        Ok(documents.into_iter().map(Answer::from).collect())
    }
}
