/// Errors raised while establishing or checking a database connection.
///
/// Per-request query failures are not represented here; domain crates map the
/// driver error into their own error type.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// MongoDB driver error (URI parsing, client construction)
    #[cfg(feature = "mongodb")]
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    /// The server could not be reached
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
