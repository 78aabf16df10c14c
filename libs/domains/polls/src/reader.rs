use tracing::instrument;

use crate::error::PollResult;
use crate::grid::ResponseGrid;
use crate::models::{Answer, Event};
use crate::repository::{AnswerRepository, EventRepository};

/// Read access for the participant-facing views.
///
/// Reads go straight to the repositories. Absence is `Ok(None)` or an empty
/// list; `Err` always means the fetch itself failed.
pub struct PollReader<E: EventRepository, A: AnswerRepository> {
    events: E,
    answers: A,
}

impl<E: EventRepository, A: AnswerRepository> PollReader<E, A> {
    pub fn new(events: E, answers: A) -> Self {
        Self { events, answers }
    }

    #[instrument(skip(self))]
    pub async fn get_event(&self, id: &str) -> PollResult<Option<Event>> {
        self.events.find_event(id).await
    }

    #[instrument(skip(self))]
    pub async fn list_answers(&self, event_id: &str) -> PollResult<Vec<Answer>> {
        self.answers.list_by_event(event_id).await
    }

    /// Response grid for an event, or `None` if the event does not exist.
    #[instrument(skip(self))]
    pub async fn grid(&self, event_id: &str) -> PollResult<Option<ResponseGrid>> {
        let Some(event) = self.events.find_event(event_id).await? else {
            return Ok(None);
        };

        let answers = self.answers.list_by_event(event_id).await?;
        Ok(Some(ResponseGrid::build(&event, &answers)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PollError;
    use crate::models::Availability;
    use crate::repository::{MockAnswerRepository, MockEventRepository};

    fn event() -> Event {
        Event {
            id: "E1".to_string(),
            name: "Team Sync".to_string(),
            dates: vec!["2025-01-10".to_string(), "2025-01-11".to_string()],
            created_at: "2025-01-01T00:00:00.000Z".to_string(),
        }
    }

    fn answer() -> Answer {
        Answer {
            id: "A1".to_string(),
            event_id: "E1".to_string(),
            user_name: "Alice".to_string(),
            availability: Availability::from([("2025-01-11".to_string(), "maybe".to_string())]),
            created_at: "2025-01-02T00:00:00.000Z".to_string(),
            updated_at: "2025-01-02T00:00:00.000Z".to_string(),
        }
    }

    #[tokio::test]
    async fn test_grid_for_existing_event() {
        let mut events = MockEventRepository::new();
        events.expect_find_event().returning(|_| Ok(Some(event())));
        let mut answers = MockAnswerRepository::new();
        answers
            .expect_list_by_event()
            .returning(|_| Ok(vec![answer()]));

        let reader = PollReader::new(events, answers);
        let grid = reader.grid("E1").await.unwrap().unwrap();

        assert_eq!(grid.columns, event().dates);
        assert_eq!(grid.rows[0].cells, vec!["-", "maybe"]);
    }

    #[tokio::test]
    async fn test_grid_for_missing_event_skips_answers() {
        let mut events = MockEventRepository::new();
        events.expect_find_event().returning(|_| Ok(None));
        let mut answers = MockAnswerRepository::new();
        answers.expect_list_by_event().never();

        let reader = PollReader::new(events, answers);
        assert!(reader.grid("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_fetch_failure_is_distinct_from_absence() {
        let mut events = MockEventRepository::new();
        events
            .expect_find_event()
            .returning(|_| Err(PollError::Database("unreachable".to_string())));
        let answers = MockAnswerRepository::new();

        let reader = PollReader::new(events, answers);
        assert!(reader.get_event("E1").await.is_err());
    }

    #[tokio::test]
    async fn test_list_answers_empty() {
        let events = MockEventRepository::new();
        let mut answers = MockAnswerRepository::new();
        answers.expect_list_by_event().returning(|_| Ok(vec![]));

        let reader = PollReader::new(events, answers);
        assert!(reader.list_answers("E1").await.unwrap().is_empty());
    }
}
