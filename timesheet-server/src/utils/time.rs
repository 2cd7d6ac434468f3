//! Date helpers - week and month boundaries
//!
//! Every "same week" comparison in the codebase goes through
//! [`start_of_week`]; nothing else does day-of-week arithmetic.

use chrono::{Datelike, Duration, NaiveDate};

use super::{AppError, AppResult};

/// Canonical start of the 7-day period containing `date`, anchored on
/// Sunday. Idempotent: `start_of_week(start_of_week(d)) == start_of_week(d)`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    let diff = date.weekday().num_days_from_sunday() as i64;
    date - Duration::days(diff)
}

/// Parse a date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// Parse a month string (YYYY-MM) into its first day
pub fn parse_month(month: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{month}-01"), "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid month format: {}", month)))
}

/// First and last day of the month containing `date` (both inclusive)
pub fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = date.with_day(1).unwrap_or(date);
    let next_month = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    };
    let last = next_month
        .map(|d| d - Duration::days(1))
        .unwrap_or(first);
    (first, last)
}
