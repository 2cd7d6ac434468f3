use thiserror::Error;

/// Top-level server error: startup and shutdown failures that never cross
/// the API boundary (handlers use `AppError` instead)
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Result alias for server lifecycle code
pub type Result<T> = std::result::Result<T, ServerError>;
