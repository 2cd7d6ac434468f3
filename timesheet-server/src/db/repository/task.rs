//! Task Repository
//!
//! Read side of the task catalog; catalog writes happen outside the
//! workflow engine.

use super::RepoResult;
use shared::models::Task;
use sqlx::{Sqlite, SqlitePool};

/// Generic over the executor so the entry workflow can run the lookup
/// inside its own transaction.
pub async fn find_by_id<'e>(
    executor: impl sqlx::Executor<'e, Database = Sqlite>,
    id: i64,
) -> RepoResult<Option<Task>> {
    let task = sqlx::query_as::<_, Task>(
        "SELECT id, name, is_active, is_time_off FROM task WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;
    Ok(task)
}

pub async fn find_active(pool: &SqlitePool) -> RepoResult<Vec<Task>> {
    let tasks = sqlx::query_as::<_, Task>(
        "SELECT id, name, is_active, is_time_off FROM task WHERE is_active = 1 ORDER BY name",
    )
    .fetch_all(pool)
    .await?;
    Ok(tasks)
}
