//! Server state initialization tests

use timesheet_server::core::{Config, ServerState};

#[tokio::test]
async fn test_initialize_creates_work_dir_and_migrates() {
    let work_dir = tempfile::tempdir().unwrap();
    let config = Config::with_overrides(work_dir.path().to_string_lossy(), 0);

    let state = ServerState::initialize(&config).await.unwrap();

    assert!(config.database_dir().join("timesheet.db").exists());
    assert!(config.logs_dir().exists());

    // Migrations ran: the schema is queryable
    let tables: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN \
         ('user', 'task', 'time_entry', 'time_off_request', 'closed_week')",
    )
    .fetch_one(&state.pool)
    .await
    .unwrap();
    assert_eq!(tables, 5);
}
