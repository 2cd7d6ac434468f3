//! Time Entry Model
//!
//! The central record: hours logged by a user against a task on a date.
//! Entries whose task is time-off-flagged own exactly one time-off request;
//! the pair is created and deleted together.

use super::{TaskDto, TimeOffRequestDto, UserDto};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Time entry row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct TimeEntry {
    pub id: i64,
    pub user_id: i64,
    pub task_id: i64,
    pub date: NaiveDate,
    /// Whole hours, always > 0
    pub hours: i64,
    pub comment: Option<String>,
    /// Link to the owned time-off request, if the task is time-off-flagged
    pub time_off_request_id: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Hydrated time entry returned by the API: user/task snapshots plus the
/// time-off request when one exists
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeEntryDto {
    pub id: i64,
    pub user: UserDto,
    pub task: TaskDto,
    pub date: NaiveDate,
    pub hours: i64,
    pub comment: Option<String>,
    pub time_off_request: Option<TimeOffRequestDto>,
}

/// Create time entry payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeEntryCreate {
    pub task_id: i64,
    pub date: NaiveDate,
    pub hours: i64,
    #[serde(default)]
    pub comment: Option<String>,
}

/// Create payload for administrators logging hours on an employee's behalf
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeEntryCreateForUser {
    pub user_id: i64,
    pub task_id: i64,
    pub date: NaiveDate,
    pub hours: i64,
    #[serde(default)]
    pub comment: Option<String>,
}

/// Update time entry payload
///
/// Task, date, hours and comment are the only mutable fields; the owning
/// user is asserted, never changed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeEntryUpdate {
    pub task_id: i64,
    pub date: NaiveDate,
    pub hours: i64,
    #[serde(default)]
    pub comment: Option<String>,
}

/// Admin update payload: asserts which user the entry must belong to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeEntryUpdateForUser {
    pub user_id: i64,
    pub task_id: i64,
    pub date: NaiveDate,
    pub hours: i64,
    #[serde(default)]
    pub comment: Option<String>,
}
