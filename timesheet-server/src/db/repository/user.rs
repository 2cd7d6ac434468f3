//! User Repository
//!
//! Read-only lookups; users are provisioned by the identity subsystem.

use super::RepoResult;
use shared::models::User;
use sqlx::Sqlite;

/// Generic over the executor so the entry workflow can run the lookup
/// inside its own transaction.
pub async fn find_by_id<'e>(
    executor: impl sqlx::Executor<'e, Database = Sqlite>,
    id: i64,
) -> RepoResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, first_name, last_name, email, is_admin FROM user WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;
    Ok(user)
}
