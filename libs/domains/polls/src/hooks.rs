use async_trait::async_trait;
use tracing::info;

use crate::error::PollResult;
use crate::models::Event;

/// Reaction to a newly stored event.
///
/// Hooks run on a spawned task after the create call has returned; their
/// outcome never reaches the caller.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventCreatedHook: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    async fn on_event_created(&self, event: &Event) -> PollResult<()>;
}

/// Logs each created event with its date count.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingHook;

#[async_trait]
impl EventCreatedHook for LoggingHook {
    fn name(&self) -> &'static str {
        "logging"
    }

    async fn on_event_created(&self, event: &Event) -> PollResult<()> {
        info!(
            event_id = %event.id,
            event_name = %event.name,
            dates_count = event.dates.len(),
            "New event created"
        );
        Ok(())
    }
}
