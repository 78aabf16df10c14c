//! Poll routes wired to the configured store.

use axum::Router;
use domain_polls::{
    AnswerService, EventService, LoggingHook, MongoAnswerRepository, MongoEventRepository,
};
use tracing::info;

use crate::state::{AppState, Store};

pub fn router(state: &AppState) -> Router {
    match &state.store {
        Store::MongoDb { db, .. } => {
            let events = MongoEventRepository::new(db);
            let answers = MongoAnswerRepository::new(db);

            domain_polls::handlers::router(
                EventService::new(events.clone()).with_hook(LoggingHook),
                AnswerService::new(events, answers),
            )
        }
        Store::Memory(store) => domain_polls::handlers::router(
            EventService::new(store.clone()).with_hook(LoggingHook),
            AnswerService::new(store.clone(), store.clone()),
        ),
    }
}

/// Create the `answers.eventId` index
pub async fn init_indexes(db: &mongodb::Database) -> eyre::Result<()> {
    MongoAnswerRepository::new(db)
        .create_indexes()
        .await
        .map_err(|e| eyre::eyre!("Failed to create answer indexes: {}", e))?;
    info!("Answer collection indexes created");
    Ok(())
}
