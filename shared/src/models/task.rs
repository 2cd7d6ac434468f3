//! Task Model
//!
//! Catalog entry a time entry is logged against. `is_time_off` decides
//! whether logging hours against it spawns a time-off request.

use serde::{Deserialize, Serialize};

/// Task catalog row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Task {
    pub id: i64,
    pub name: String,
    pub is_active: bool,
    pub is_time_off: bool,
}

/// Task snapshot embedded in time entry responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskDto {
    pub id: i64,
    pub name: String,
    pub is_active: bool,
    pub is_time_off: bool,
}

impl From<Task> for TaskDto {
    fn from(t: Task) -> Self {
        Self {
            id: t.id,
            name: t.name,
            is_active: t.is_active,
            is_time_off: t.is_time_off,
        }
    }
}
