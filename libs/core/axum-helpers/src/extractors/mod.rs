//! Custom extractors for Axum handlers.

pub mod envelope;

pub use envelope::Envelope;
