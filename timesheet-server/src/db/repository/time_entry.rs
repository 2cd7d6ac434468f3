//! Time Entry Repository
//!
//! Create/update/delete of time entries with the week lock, ownership and
//! hours rules enforced inside a single transaction per operation. Entries
//! on a time-off task are created together with their pending request and
//! removed together with it.

use super::{RepoError, RepoResult, closed_week, task, user};
use chrono::NaiveDate;
use shared::models::{TaskDto, TimeEntry, TimeEntryDto, TimeOffRequestDto, TimeOffStatus, UserDto};
use shared::util::now_millis;
use sqlx::SqlitePool;

/// Flat row for the hydrated entry queries: entry columns joined with the
/// owning user, the task and the optional time-off request.
#[derive(sqlx::FromRow)]
pub(super) struct EntryDetailRow {
    id: i64,
    date: NaiveDate,
    hours: i64,
    comment: Option<String>,
    user_id: i64,
    first_name: String,
    last_name: String,
    email: String,
    is_admin: bool,
    task_id: i64,
    task_name: String,
    is_active: bool,
    is_time_off: bool,
    request_id: Option<i64>,
    request_status: Option<TimeOffStatus>,
}

pub(super) const DETAIL_SELECT: &str = "\
    SELECT e.id, e.date, e.hours, e.comment, \
           u.id AS user_id, u.first_name, u.last_name, u.email, u.is_admin, \
           t.id AS task_id, t.name AS task_name, t.is_active, t.is_time_off, \
           r.id AS request_id, r.status AS request_status \
    FROM time_entry e \
    JOIN user u ON u.id = e.user_id \
    JOIN task t ON t.id = e.task_id \
    LEFT JOIN time_off_request r ON r.id = e.time_off_request_id";

impl From<EntryDetailRow> for TimeEntryDto {
    fn from(row: EntryDetailRow) -> Self {
        let time_off_request = match (row.request_id, row.request_status) {
            (Some(id), Some(status)) => Some(TimeOffRequestDto { id, status }),
            _ => None,
        };
        Self {
            id: row.id,
            user: UserDto {
                id: row.user_id,
                first_name: row.first_name,
                last_name: row.last_name,
                email: row.email,
                is_admin: row.is_admin,
            },
            task: TaskDto {
                id: row.task_id,
                name: row.task_name,
                is_active: row.is_active,
                is_time_off: row.is_time_off,
            },
            date: row.date,
            hours: row.hours,
            comment: row.comment,
            time_off_request,
        }
    }
}

/// Create a time entry for `user_id`.
///
/// Rule order: week lock on the entry's date, hours, user, task. When the
/// task is time-off-flagged the pending request is inserted in the same
/// transaction and linked before commit.
pub async fn create(
    pool: &SqlitePool,
    user_id: i64,
    task_id: i64,
    date: NaiveDate,
    hours: i64,
    comment: Option<String>,
) -> RepoResult<TimeEntryDto> {
    let mut tx = pool.begin().await?;

    if closed_week::is_closed_tx(&mut tx, date).await? {
        return Err(RepoError::WeekClosed);
    }
    if hours <= 0 {
        return Err(RepoError::InvalidHours);
    }
    user::find_by_id(&mut *tx, user_id)
        .await?
        .ok_or(RepoError::UserNotFound(user_id))?;
    let task = task::find_by_id(&mut *tx, task_id)
        .await?
        .ok_or(RepoError::TaskNotFound(task_id))?;

    let request_id = if task.is_time_off {
        let result = sqlx::query("INSERT INTO time_off_request (status) VALUES (?)")
            .bind(TimeOffStatus::Pending)
            .execute(&mut *tx)
            .await?;
        Some(result.last_insert_rowid())
    } else {
        None
    };

    let now = now_millis();
    let result = sqlx::query(
        "INSERT INTO time_entry \
         (user_id, task_id, date, hours, comment, time_off_request_id, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(user_id)
    .bind(task_id)
    .bind(date)
    .bind(hours)
    .bind(&comment)
    .bind(request_id)
    .bind(now)
    .bind(now)
    .execute(&mut *tx)
    .await?;
    let entry_id = result.last_insert_rowid();

    tx.commit().await?;

    find_detail(pool, entry_id).await
}

/// Update an existing entry.
///
/// `owner_id` is the user the caller asserts the entry belongs to; a
/// mismatch against the stored owner fails without touching the row. The
/// week lock is checked against the date being written.
pub async fn update(
    pool: &SqlitePool,
    entry_id: i64,
    owner_id: i64,
    task_id: i64,
    date: NaiveDate,
    hours: i64,
    comment: Option<String>,
) -> RepoResult<TimeEntryDto> {
    let mut tx = pool.begin().await?;

    if closed_week::is_closed_tx(&mut tx, date).await? {
        return Err(RepoError::WeekClosed);
    }
    if hours <= 0 {
        return Err(RepoError::InvalidHours);
    }
    user::find_by_id(&mut *tx, owner_id)
        .await?
        .ok_or(RepoError::UserNotFound(owner_id))?;
    task::find_by_id(&mut *tx, task_id)
        .await?
        .ok_or(RepoError::TaskNotFound(task_id))?;

    let stored_owner: Option<i64> =
        sqlx::query_scalar("SELECT user_id FROM time_entry WHERE id = ?")
            .bind(entry_id)
            .fetch_optional(&mut *tx)
            .await?;
    let stored_owner = stored_owner.ok_or(RepoError::EntryNotFound(entry_id))?;
    if stored_owner != owner_id {
        return Err(RepoError::OwnershipMismatch);
    }

    sqlx::query(
        "UPDATE time_entry \
         SET task_id = ?, date = ?, hours = ?, comment = ?, updated_at = ? \
         WHERE id = ?",
    )
    .bind(task_id)
    .bind(date)
    .bind(hours)
    .bind(&comment)
    .bind(now_millis())
    .bind(entry_id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    find_detail(pool, entry_id).await
}

/// Delete an entry, and its linked time-off request when one exists.
///
/// Non-admins may only delete their own entries. The week lock is checked
/// against the entry's stored date.
pub async fn delete(
    pool: &SqlitePool,
    entry_id: i64,
    requesting_user_id: i64,
    is_admin: bool,
) -> RepoResult<()> {
    let mut tx = pool.begin().await?;

    let entry = sqlx::query_as::<_, TimeEntry>(
        "SELECT id, user_id, task_id, date, hours, comment, time_off_request_id, \
                created_at, updated_at \
         FROM time_entry WHERE id = ?",
    )
    .bind(entry_id)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or(RepoError::EntryNotFound(entry_id))?;

    if closed_week::is_closed_tx(&mut tx, entry.date).await? {
        return Err(RepoError::WeekClosed);
    }
    if entry.user_id != requesting_user_id && !is_admin {
        return Err(RepoError::Forbidden(
            "You can only delete your own time entries.".to_string(),
        ));
    }

    sqlx::query("DELETE FROM time_entry WHERE id = ?")
        .bind(entry_id)
        .execute(&mut *tx)
        .await?;
    if let Some(request_id) = entry.time_off_request_id {
        sqlx::query("DELETE FROM time_off_request WHERE id = ?")
            .bind(request_id)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    Ok(())
}

/// All entries for `user_id` in the week containing `date`, date ascending.
pub async fn list_week(
    pool: &SqlitePool,
    user_id: i64,
    date: NaiveDate,
) -> RepoResult<Vec<TimeEntryDto>> {
    let week_start = crate::utils::time::start_of_week(date);
    let week_end = week_start + chrono::Days::new(7);

    let rows = sqlx::query_as::<_, EntryDetailRow>(&format!(
        "{DETAIL_SELECT} WHERE e.user_id = ? AND e.date >= ? AND e.date < ? ORDER BY e.date ASC"
    ))
    .bind(user_id)
    .bind(week_start)
    .bind(week_end)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Into::into).collect())
}

/// Hydrated single entry lookup.
pub async fn find_detail(pool: &SqlitePool, entry_id: i64) -> RepoResult<TimeEntryDto> {
    let row = sqlx::query_as::<_, EntryDetailRow>(&format!("{DETAIL_SELECT} WHERE e.id = ?"))
        .bind(entry_id)
        .fetch_optional(pool)
        .await?
        .ok_or(RepoError::EntryNotFound(entry_id))?;
    Ok(row.into())
}
