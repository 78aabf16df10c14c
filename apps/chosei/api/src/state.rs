//! Shared application state.

use domain_polls::MemoryPollStore;
use mongodb::{Client, Database};

/// Store handles created once at startup and injected into the services.
#[derive(Clone)]
pub enum Store {
    MongoDb { client: Client, db: Database },
    Memory(MemoryPollStore),
}

/// Cloned into each router; all members are cheap handle clones.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub store: Store,
}
