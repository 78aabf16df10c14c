use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::documents::{AnswerDocument, EventDocument};
use crate::error::{PollError, PollResult};
use crate::hooks::EventCreatedHook;
use crate::models::{Answer, CreateAnswer, CreateEvent, Event};
use crate::repository::{AnswerRepository, EventRepository};

/// Creates and fetches events.
pub struct EventService<R: EventRepository> {
    repository: R,
    hooks: Vec<Arc<dyn EventCreatedHook>>,
}

impl<R: EventRepository> EventService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            hooks: Vec::new(),
        }
    }

    /// Register a hook run after each successful create.
    pub fn with_hook(mut self, hook: impl EventCreatedHook + 'static) -> Self {
        self.hooks.push(Arc::new(hook));
        self
    }

    /// Validate and store a new event, returning its identifier.
    ///
    /// Hooks are spawned after the write and not awaited.
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CreateEvent) -> PollResult<String> {
        debug!(received = ?input, "Create event request");

        let new_event = input.into_new_event().inspect_err(log_rejection)?;
        let document = EventDocument::from(new_event);

        let id = self
            .repository
            .insert_event(document.clone())
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to store event"))?;

        let event = Event {
            id: id.clone(),
            ..Event::from(document)
        };
        info!(
            event_id = %event.id,
            event_name = %event.name,
            dates_count = event.dates.len(),
            "Event created"
        );

        self.notify(event);
        Ok(id)
    }

    /// Fetch an event; `Ok(None)` when it does not exist.
    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> PollResult<Option<Event>> {
        self.repository.find_event(id).await
    }

    fn notify(&self, event: Event) {
        if self.hooks.is_empty() {
            return;
        }

        let event = Arc::new(event);
        for hook in &self.hooks {
            let hook = Arc::clone(hook);
            let event = Arc::clone(&event);
            tokio::spawn(async move {
                if let Err(e) = hook.on_event_created(&event).await {
                    warn!(hook = hook.name(), event_id = %event.id, error = %e, "Event hook failed");
                }
            });
        }
    }
}

/// Accepts availability submissions for existing events.
pub struct AnswerService<E: EventRepository, A: AnswerRepository> {
    events: E,
    answers: A,
}

impl<E: EventRepository, A: AnswerRepository> AnswerService<E, A> {
    pub fn new(events: E, answers: A) -> Self {
        Self { events, answers }
    }

    /// Validate, confirm the event exists, then store the answer.
    ///
    /// A missing event fails with [`PollError::EventNotFound`] and nothing is written.
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CreateAnswer) -> PollResult<String> {
        debug!(received = ?input, "Submit answer request");

        let new_answer = input.into_new_answer().inspect_err(log_rejection)?;

        if self.events.find_event(&new_answer.event_id).await?.is_none() {
            info!(event_id = %new_answer.event_id, "Answer rejected: event not found");
            return Err(PollError::EventNotFound(new_answer.event_id));
        }

        let event_id = new_answer.event_id.clone();
        let user_name = new_answer.user_name.clone();

        let id = self
            .answers
            .insert_answer(AnswerDocument::from(new_answer))
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to store answer"))?;

        info!(answer_id = %id, event_id = %event_id, user_name = %user_name, "Answer submitted");
        Ok(id)
    }

    /// Every answer for `event_id`, in store order.
    #[instrument(skip(self))]
    pub async fn list_by_event(&self, event_id: &str) -> PollResult<Vec<Answer>> {
        self.answers.list_by_event(event_id).await
    }
}

fn log_rejection(err: &PollError) {
    if let PollError::Validation { received, .. } = err {
        info!(%received, "Rejected invalid request data");
    }
}
