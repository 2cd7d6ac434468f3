//! Repository Module
//!
//! Workflow operations over the SQLite store. Each function re-reads state
//! inside its own transaction; nothing is cached between calls.

pub mod closed_week;
pub mod task;
pub mod time_entry;
pub mod time_off_request;
pub mod user;

use thiserror::Error;

/// Workflow failure taxonomy
///
/// Every rule the engine enforces has exactly one variant here; handlers map
/// these onto HTTP categories without losing the message.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Selected week is closed.")]
    WeekClosed,

    #[error("Week is already closed.")]
    AlreadyClosed,

    #[error("Cannot open a week that is not closed.")]
    NotClosed,

    #[error("Invalid time entry data: hours must be greater than zero.")]
    InvalidHours,

    #[error("Couldn't find the time entry with ID: {0}.")]
    EntryNotFound(i64),

    #[error("Couldn't find the time off request with ID: {0}.")]
    RequestNotFound(i64),

    #[error("No time entry is linked to time off request {0}.")]
    OrphanRequest(i64),

    #[error("User not found: {0}.")]
    UserNotFound(i64),

    #[error("Task not found: {0}.")]
    TaskNotFound(i64),

    #[error("Time entry belongs to a different user.")]
    OwnershipMismatch,

    #[error("{0}")]
    Forbidden(String),

    #[error("Cannot delete past time off requests.")]
    AlreadyPast,

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
