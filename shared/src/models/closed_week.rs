//! Closed Week Payload
//!
//! The marker rows themselves never leave the database layer; the API only
//! carries a date identifying the target week.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Close/open week payload: any date inside the target week
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClosedWeekPayload {
    pub date: NaiveDate,
}
