//! Time-Off Request Model
//!
//! Child record of a time entry whose task is time-off-flagged. Created
//! atomically with its parent entry, never standalone, and deleted only
//! together with it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Approval status: Pending (initial) -> Approved | Rejected
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum TimeOffStatus {
    Pending,
    Approved,
    Rejected,
}

impl Default for TimeOffStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl fmt::Display for TimeOffStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        };
        f.write_str(s)
    }
}

impl FromStr for TimeOffStatus {
    type Err = String;

    /// Case-insensitive: "pending", "Pending" and "PENDING" all parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "PENDING" => Ok(Self::Pending),
            "APPROVED" => Ok(Self::Approved),
            "REJECTED" => Ok(Self::Rejected),
            other => Err(format!("Unknown time off status: {other}")),
        }
    }
}

/// Time-off request snapshot embedded in time entry responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeOffRequestDto {
    pub id: i64,
    pub status: TimeOffStatus,
}

/// Admin filter for browsing time-off requests; absent field = no filtering
/// on that axis. Dates are inclusive on both ends.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TimeOffFilter {
    pub user_id: Option<i64>,
    /// Matched case-insensitively against the status name
    pub status: Option<String>,
    pub start_date: Option<chrono::NaiveDate>,
    pub end_date: Option<chrono::NaiveDate>,
}

/// Payload for rejecting a time-off request
#[derive(Debug, Clone, Deserialize)]
pub struct RejectTimeOff {
    /// Non-empty comment replaces the linked entry's comment verbatim
    pub comment: Option<String>,
}

/// Payload for a user withdrawing their own time-off request
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteTimeOff {
    /// The date/time the time off was requested for; past dates cannot be
    /// withdrawn
    pub requested_date: chrono::NaiveDateTime,
}

/// Per-user total of time-off hours within a month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeOffSummaryDto {
    pub user_id: i64,
    pub user_name: String,
    pub total_hours: i64,
}

/// Calendar feed item: one time-off entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEntryDto {
    pub id: i64,
    pub name: String,
    pub date: chrono::NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!("pending".parse::<TimeOffStatus>(), Ok(TimeOffStatus::Pending));
        assert_eq!("Approved".parse::<TimeOffStatus>(), Ok(TimeOffStatus::Approved));
        assert_eq!("REJECTED".parse::<TimeOffStatus>(), Ok(TimeOffStatus::Rejected));
        assert!("vacation".parse::<TimeOffStatus>().is_err());
    }

    #[test]
    fn status_round_trips_through_display() {
        for status in [
            TimeOffStatus::Pending,
            TimeOffStatus::Approved,
            TimeOffStatus::Rejected,
        ] {
            assert_eq!(status.to_string().parse::<TimeOffStatus>(), Ok(status));
        }
    }
}
