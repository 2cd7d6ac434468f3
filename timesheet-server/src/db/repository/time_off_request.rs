//! Time-Off Request Repository
//!
//! Approval state machine (Pending -> Approved | Rejected) plus the read
//! queries built on top of it. Decisions commit before any notification is
//! attempted; callers get a snapshot of the linked entry to notify from.

use super::time_entry::{DETAIL_SELECT, EntryDetailRow};
use super::{RepoError, RepoResult};
use crate::utils::time::month_bounds;
use chrono::{NaiveDate, NaiveDateTime};
use shared::models::{
    CalendarEntryDto, TimeEntryDto, TimeOffFilter, TimeOffStatus, TimeOffSummaryDto,
};
use shared::util::now_millis;
use sqlx::{SqliteConnection, SqlitePool};

/// Snapshot of a decided request and its linked entry, taken in the same
/// transaction as the status write. Everything a notification needs.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TimeOffDecision {
    pub request_id: i64,
    pub user_first_name: String,
    pub user_email: String,
    pub date: NaiveDate,
    pub hours: i64,
    pub comment: Option<String>,
}

const DECISION_SELECT: &str = "\
    SELECT e.time_off_request_id AS request_id, \
           u.first_name AS user_first_name, u.email AS user_email, \
           e.date, e.hours, e.comment \
    FROM time_entry e \
    JOIN user u ON u.id = e.user_id \
    WHERE e.time_off_request_id = ?";

/// Approve a request. Re-approving an already decided request overwrites
/// the status rather than failing.
pub async fn approve(pool: &SqlitePool, request_id: i64) -> RepoResult<TimeOffDecision> {
    let mut tx = pool.begin().await?;

    request_exists(&mut tx, request_id).await?;
    let decision = linked_entry(&mut tx, request_id).await?;

    set_status(&mut tx, request_id, TimeOffStatus::Approved).await?;
    tx.commit().await?;
    Ok(decision)
}

/// Reject a request. A non-empty `comment` replaces the linked entry's
/// comment verbatim; the returned snapshot carries the comment as stored
/// after the replacement.
pub async fn reject(
    pool: &SqlitePool,
    request_id: i64,
    comment: Option<&str>,
) -> RepoResult<TimeOffDecision> {
    let mut tx = pool.begin().await?;

    request_exists(&mut tx, request_id).await?;
    let mut decision = linked_entry(&mut tx, request_id).await?;

    if let Some(comment) = comment
        && !comment.is_empty()
    {
        sqlx::query(
            "UPDATE time_entry SET comment = ?, updated_at = ? WHERE time_off_request_id = ?",
        )
        .bind(comment)
        .bind(now_millis())
        .bind(request_id)
        .execute(&mut *tx)
        .await?;
        decision.comment = Some(comment.to_string());
    }

    set_status(&mut tx, request_id, TimeOffStatus::Rejected).await?;
    tx.commit().await?;
    Ok(decision)
}

/// Withdraw one's own pending-or-decided request, removing the request and
/// its entry together. Requests for dates already in the past stay on
/// record. Returns the deleted request id.
pub async fn delete_own(
    pool: &SqlitePool,
    request_id: i64,
    requested_date: NaiveDateTime,
    requesting_user_id: i64,
) -> RepoResult<i64> {
    let mut tx = pool.begin().await?;

    request_exists(&mut tx, request_id).await?;

    let now = chrono::Local::now().naive_local();
    if requested_date < now {
        return Err(RepoError::AlreadyPast);
    }

    let entry: Option<(i64, i64)> = sqlx::query_as(
        "SELECT id, user_id FROM time_entry WHERE time_off_request_id = ?",
    )
    .bind(request_id)
    .fetch_optional(&mut *tx)
    .await?;
    let (entry_id, owner_id) = entry.ok_or(RepoError::OrphanRequest(request_id))?;
    if owner_id != requesting_user_id {
        return Err(RepoError::OwnershipMismatch);
    }

    sqlx::query("DELETE FROM time_entry WHERE id = ?")
        .bind(entry_id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM time_off_request WHERE id = ?")
        .bind(request_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(request_id)
}

/// Browse time-off entries across users. Each absent filter field means no
/// narrowing on that axis; an unparseable status is treated as absent. The
/// date range applies only when both ends are given, inclusive on both.
pub async fn filter(pool: &SqlitePool, f: &TimeOffFilter) -> RepoResult<Vec<TimeEntryDto>> {
    let status = f
        .status
        .as_deref()
        .and_then(|s| s.parse::<TimeOffStatus>().ok());
    let range = match (f.start_date, f.end_date) {
        (Some(start), Some(end)) => Some((start, end)),
        _ => None,
    };

    let rows = sqlx::query_as::<_, EntryDetailRow>(&format!(
        "{DETAIL_SELECT} \
         WHERE t.is_time_off = 1 AND e.time_off_request_id IS NOT NULL \
           AND (? IS NULL OR e.user_id = ?) \
           AND (? IS NULL OR r.status = ?) \
           AND (? IS NULL OR (e.date >= ? AND e.date <= ?)) \
         ORDER BY e.date ASC"
    ))
    .bind(f.user_id)
    .bind(f.user_id)
    .bind(status)
    .bind(status)
    .bind(range.map(|(start, _)| start))
    .bind(range.map(|(start, _)| start))
    .bind(range.map(|(_, end)| end))
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Into::into).collect())
}

/// A user's own time-off entries, newest first.
pub async fn list_for_user(pool: &SqlitePool, user_id: i64) -> RepoResult<Vec<TimeEntryDto>> {
    let rows = sqlx::query_as::<_, EntryDetailRow>(&format!(
        "{DETAIL_SELECT} \
         WHERE e.user_id = ? AND t.is_time_off = 1 AND e.time_off_request_id IS NOT NULL \
         ORDER BY e.date DESC"
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Into::into).collect())
}

/// Calendar feed: every time-off entry with the owner's display name.
pub async fn calendar_feed(pool: &SqlitePool) -> RepoResult<Vec<CalendarEntryDto>> {
    let rows: Vec<(i64, String, String, NaiveDate)> = sqlx::query_as(
        "SELECT e.id, u.first_name, u.last_name, e.date \
         FROM time_entry e \
         JOIN user u ON u.id = e.user_id \
         JOIN task t ON t.id = e.task_id \
         WHERE t.is_time_off = 1 \
         ORDER BY e.date ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(id, first, last, date)| CalendarEntryDto {
            id,
            name: format!("{first} {last}"),
            date,
        })
        .collect())
}

/// Per-user time-off hour totals within the month containing `month_day`.
pub async fn monthly_summary(
    pool: &SqlitePool,
    month_day: NaiveDate,
) -> RepoResult<Vec<TimeOffSummaryDto>> {
    let (first, last) = month_bounds(month_day);

    let rows: Vec<(i64, String, String, i64)> = sqlx::query_as(
        "SELECT u.id, u.first_name, u.last_name, SUM(e.hours) AS total_hours \
         FROM time_entry e \
         JOIN user u ON u.id = e.user_id \
         JOIN task t ON t.id = e.task_id \
         WHERE t.is_time_off = 1 AND e.date >= ? AND e.date <= ? \
         GROUP BY u.id, u.first_name, u.last_name \
         ORDER BY u.id",
    )
    .bind(first)
    .bind(last)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(user_id, first, last, total_hours)| TimeOffSummaryDto {
            user_id,
            user_name: format!("{first} {last}"),
            total_hours,
        })
        .collect())
}

async fn set_status(
    conn: &mut SqliteConnection,
    request_id: i64,
    status: TimeOffStatus,
) -> RepoResult<()> {
    sqlx::query("UPDATE time_off_request SET status = ? WHERE id = ?")
        .bind(status)
        .bind(request_id)
        .execute(conn)
        .await?;
    Ok(())
}

async fn request_exists(conn: &mut SqliteConnection, request_id: i64) -> RepoResult<()> {
    let exists: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM time_off_request WHERE id = ?)")
            .bind(request_id)
            .fetch_one(conn)
            .await?;
    if exists {
        Ok(())
    } else {
        Err(RepoError::RequestNotFound(request_id))
    }
}

/// Load the decision snapshot, or `OrphanRequest` when no entry links back.
async fn linked_entry(
    conn: &mut SqliteConnection,
    request_id: i64,
) -> RepoResult<TimeOffDecision> {
    sqlx::query_as::<_, TimeOffDecision>(DECISION_SELECT)
        .bind(request_id)
        .fetch_optional(conn)
        .await?
        .ok_or(RepoError::OrphanRequest(request_id))
}
