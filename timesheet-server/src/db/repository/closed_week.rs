//! Closed Week Repository
//!
//! A week is closed exactly when a marker row for its canonical start date
//! exists. Nothing is cached: every check hits the table.

use super::{RepoError, RepoResult};
use crate::utils::time::start_of_week;
use chrono::NaiveDate;
use sqlx::{SqliteConnection, SqlitePool};

/// Close the week containing `date`. Returns the canonical week start.
///
/// The UNIQUE constraint on `week_start` backs up the pre-check: the loser
/// of a concurrent close still gets `AlreadyClosed` instead of a duplicate
/// marker row.
pub async fn close_week(pool: &SqlitePool, date: NaiveDate) -> RepoResult<NaiveDate> {
    let week_start = start_of_week(date);

    if is_closed(pool, week_start).await? {
        return Err(RepoError::AlreadyClosed);
    }

    let result = sqlx::query("INSERT INTO closed_week (week_start) VALUES (?)")
        .bind(week_start)
        .execute(pool)
        .await;

    match result {
        Ok(_) => Ok(week_start),
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            Err(RepoError::AlreadyClosed)
        }
        Err(e) => Err(e.into()),
    }
}

/// Open the week containing `date`. Returns the canonical week start.
pub async fn open_week(pool: &SqlitePool, date: NaiveDate) -> RepoResult<NaiveDate> {
    let week_start = start_of_week(date);

    let result = sqlx::query("DELETE FROM closed_week WHERE week_start = ?")
        .bind(week_start)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(RepoError::NotClosed);
    }
    Ok(week_start)
}

/// Is the week containing `date` closed for edits?
pub async fn is_closed(pool: &SqlitePool, date: NaiveDate) -> RepoResult<bool> {
    let week_start = start_of_week(date);
    let closed: bool = sqlx::query_scalar(
        "SELECT EXISTS(SELECT 1 FROM closed_week WHERE week_start = ?)",
    )
    .bind(week_start)
    .fetch_one(pool)
    .await?;
    Ok(closed)
}

/// Week-lock check usable inside an open transaction. The entry workflow
/// calls this so the check and the mutation it guards commit together.
pub(crate) async fn is_closed_tx(
    conn: &mut SqliteConnection,
    date: NaiveDate,
) -> RepoResult<bool> {
    let week_start = start_of_week(date);
    let closed: bool = sqlx::query_scalar(
        "SELECT EXISTS(SELECT 1 FROM closed_week WHERE week_start = ?)",
    )
    .bind(week_start)
    .fetch_one(conn)
    .await?;
    Ok(closed)
}
