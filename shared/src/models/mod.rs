//! Data models
//!
//! Shared between the server and its integration tests.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod closed_week;
pub mod task;
pub mod time_entry;
pub mod time_off_request;
pub mod user;

// Re-exports
pub use closed_week::*;
pub use task::*;
pub use time_entry::*;
pub use time_off_request::*;
pub use user::*;
