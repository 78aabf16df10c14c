//! Polls Domain
//!
//! Scheduling polls: an organizer creates an event with candidate dates,
//! participants submit per-date availability, and everyone reads the shared
//! response grid.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  POST /events  ──► EventService ──► EventRepository          │
//! │                        │                 (events)            │
//! │                        └─► hooks (spawned, not awaited)      │
//! │                                                              │
//! │  POST /answers ──► AnswerService ─┬─► EventRepository (check)│
//! │                                   └─► AnswerRepository       │
//! │                                          (answers)           │
//! │                                                              │
//! │  PollReader ──► get_event / list_answers / grid              │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Repositories are implemented for MongoDB ([`MongoEventRepository`],
//! [`MongoAnswerRepository`]) and in memory ([`MemoryPollStore`]).

pub mod documents;
pub mod error;
pub mod grid;
pub mod handlers;
pub mod hooks;
pub mod memory;
pub mod models;
pub mod mongodb;
pub mod reader;
pub mod repository;
pub mod service;
pub mod symbols;

pub use documents::{AnswerDocument, EventDocument, timestamp_now};
pub use error::{PollError, PollResult};
pub use grid::{EMPTY_CELL, GridRow, ResponseGrid};
pub use handlers::{ANSWER_SUBMITTED, ApiDoc, EVENT_CREATED};
pub use hooks::{EventCreatedHook, LoggingHook};
pub use memory::MemoryPollStore;
pub use models::{
    Answer, Availability, CreateAnswer, CreateEvent, Created, Event, NewAnswer, NewEvent,
};
pub use self::mongodb::{MongoAnswerRepository, MongoEventRepository};
pub use reader::PollReader;
pub use repository::{AnswerRepository, EventRepository};
pub use service::{AnswerService, EventService};
pub use symbols::AvailabilitySymbol;
