//! Time entry workflow tests

mod common;

use common::{
    EMPLOYEE_ID, OTHER_EMPLOYEE_ID, SICK_LEAVE_TASK_ID, WORK_TASK_ID, d, seed_defaults, test_pool,
};
use shared::models::TimeOffStatus;
use timesheet_server::db::repository::{RepoError, closed_week, task, time_entry, user};

#[tokio::test]
async fn test_create_work_entry_has_no_request() {
    let pool = test_pool().await;
    seed_defaults(&pool).await;

    let entry = time_entry::create(
        &pool,
        EMPLOYEE_ID,
        WORK_TASK_ID,
        d("2025-04-01"),
        8,
        Some("feature work".to_string()),
    )
    .await
    .unwrap();

    assert_eq!(entry.user.id, EMPLOYEE_ID);
    assert_eq!(entry.task.id, WORK_TASK_ID);
    assert_eq!(entry.hours, 8);
    assert!(entry.time_off_request.is_none());
}

#[tokio::test]
async fn test_create_time_off_entry_spawns_pending_request() {
    let pool = test_pool().await;
    seed_defaults(&pool).await;

    let entry = time_entry::create(&pool, EMPLOYEE_ID, SICK_LEAVE_TASK_ID, d("2025-04-01"), 4, None)
        .await
        .unwrap();

    let request = entry.time_off_request.expect("time-off task must spawn a request");
    assert_eq!(request.status, TimeOffStatus::Pending);
    assert_eq!(entry.hours, 4);
}

#[tokio::test]
async fn test_create_rejects_non_positive_hours() {
    let pool = test_pool().await;
    seed_defaults(&pool).await;

    for hours in [0, -1, -8] {
        let err = time_entry::create(&pool, EMPLOYEE_ID, WORK_TASK_ID, d("2025-04-01"), hours, None)
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::InvalidHours));
    }

    // The same failure applies in a closed week: hours are checked, nothing
    // is written either way
    closed_week::close_week(&pool, d("2025-04-01")).await.unwrap();
    let err = time_entry::create(&pool, EMPLOYEE_ID, WORK_TASK_ID, d("2025-04-01"), 8, None)
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::WeekClosed));

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM time_entry")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_create_checks_user_and_task_exist() {
    let pool = test_pool().await;
    seed_defaults(&pool).await;

    let err = time_entry::create(&pool, 999, WORK_TASK_ID, d("2025-04-01"), 8, None)
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::UserNotFound(999)));

    let err = time_entry::create(&pool, EMPLOYEE_ID, 999, d("2025-04-01"), 8, None)
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::TaskNotFound(999)));
}

#[tokio::test]
async fn test_find_by_id_returns_the_seeded_rows() {
    let pool = test_pool().await;
    seed_defaults(&pool).await;

    let found = user::find_by_id(&pool, EMPLOYEE_ID).await.unwrap().unwrap();
    assert_eq!(found.email, "eli@example.com");
    assert!(user::find_by_id(&pool, 999).await.unwrap().is_none());

    let found = task::find_by_id(&pool, SICK_LEAVE_TASK_ID).await.unwrap().unwrap();
    assert!(found.is_time_off);
    assert!(task::find_by_id(&pool, 999).await.unwrap().is_none());
}

#[tokio::test]
async fn test_create_in_closed_week_fails() {
    let pool = test_pool().await;
    seed_defaults(&pool).await;

    closed_week::close_week(&pool, d("2025-03-30")).await.unwrap();

    let err = time_entry::create(&pool, EMPLOYEE_ID, WORK_TASK_ID, d("2025-04-02"), 8, None)
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::WeekClosed));
}

#[tokio::test]
async fn test_update_changes_fields_but_never_owner() {
    let pool = test_pool().await;
    seed_defaults(&pool).await;

    let entry = time_entry::create(&pool, EMPLOYEE_ID, WORK_TASK_ID, d("2025-04-01"), 8, None)
        .await
        .unwrap();

    let updated = time_entry::update(
        &pool,
        entry.id,
        EMPLOYEE_ID,
        WORK_TASK_ID,
        d("2025-04-03"),
        6,
        Some("moved".to_string()),
    )
    .await
    .unwrap();

    assert_eq!(updated.date, d("2025-04-03"));
    assert_eq!(updated.hours, 6);
    assert_eq!(updated.comment.as_deref(), Some("moved"));
    assert_eq!(updated.user.id, EMPLOYEE_ID);
}

#[tokio::test]
async fn test_update_with_mismatched_owner_leaves_entry_unchanged() {
    let pool = test_pool().await;
    seed_defaults(&pool).await;

    let entry = time_entry::create(&pool, EMPLOYEE_ID, WORK_TASK_ID, d("2025-04-01"), 8, None)
        .await
        .unwrap();

    let err = time_entry::update(
        &pool,
        entry.id,
        OTHER_EMPLOYEE_ID,
        WORK_TASK_ID,
        d("2025-04-03"),
        1,
        None,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, RepoError::OwnershipMismatch));

    let stored = time_entry::find_detail(&pool, entry.id).await.unwrap();
    assert_eq!(stored.user.id, EMPLOYEE_ID);
    assert_eq!(stored.date, d("2025-04-01"));
    assert_eq!(stored.hours, 8);
}

#[tokio::test]
async fn test_update_missing_entry_fails() {
    let pool = test_pool().await;
    seed_defaults(&pool).await;

    let err = time_entry::update(&pool, 42, EMPLOYEE_ID, WORK_TASK_ID, d("2025-04-01"), 8, None)
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::EntryNotFound(42)));
}

#[tokio::test]
async fn test_update_into_closed_week_fails() {
    let pool = test_pool().await;
    seed_defaults(&pool).await;

    let entry = time_entry::create(&pool, EMPLOYEE_ID, WORK_TASK_ID, d("2025-04-01"), 8, None)
        .await
        .unwrap();

    // Lock the following week, then try to move the entry into it
    closed_week::close_week(&pool, d("2025-04-06")).await.unwrap();

    let err = time_entry::update(
        &pool,
        entry.id,
        EMPLOYEE_ID,
        WORK_TASK_ID,
        d("2025-04-08"),
        8,
        None,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, RepoError::WeekClosed));

    let stored = time_entry::find_detail(&pool, entry.id).await.unwrap();
    assert_eq!(stored.date, d("2025-04-01"));
}

#[tokio::test]
async fn test_delete_requires_ownership_unless_admin() {
    let pool = test_pool().await;
    seed_defaults(&pool).await;

    let entry = time_entry::create(&pool, EMPLOYEE_ID, WORK_TASK_ID, d("2025-04-01"), 8, None)
        .await
        .unwrap();

    // Another non-admin user may not delete it
    let err = time_entry::delete(&pool, entry.id, OTHER_EMPLOYEE_ID, false)
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Forbidden(_)));

    // The same caller with the admin flag succeeds
    time_entry::delete(&pool, entry.id, OTHER_EMPLOYEE_ID, true).await.unwrap();

    let err = time_entry::find_detail(&pool, entry.id).await.unwrap_err();
    assert!(matches!(err, RepoError::EntryNotFound(_)));
}

#[tokio::test]
async fn test_delete_in_closed_week_fails_even_for_admin() {
    let pool = test_pool().await;
    seed_defaults(&pool).await;

    let entry = time_entry::create(&pool, EMPLOYEE_ID, WORK_TASK_ID, d("2025-04-01"), 8, None)
        .await
        .unwrap();

    closed_week::close_week(&pool, d("2025-04-01")).await.unwrap();

    let err = time_entry::delete(&pool, entry.id, EMPLOYEE_ID, true).await.unwrap_err();
    assert!(matches!(err, RepoError::WeekClosed));

    // Entry survives
    assert!(time_entry::find_detail(&pool, entry.id).await.is_ok());
}

#[tokio::test]
async fn test_delete_removes_linked_request() {
    let pool = test_pool().await;
    seed_defaults(&pool).await;

    let entry = time_entry::create(&pool, EMPLOYEE_ID, SICK_LEAVE_TASK_ID, d("2025-04-01"), 8, None)
        .await
        .unwrap();
    let request_id = entry.time_off_request.unwrap().id;

    time_entry::delete(&pool, entry.id, EMPLOYEE_ID, false).await.unwrap();

    let requests: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM time_off_request WHERE id = ?")
            .bind(request_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(requests, 0);
}

#[tokio::test]
async fn test_list_week_is_scoped_and_ordered() {
    let pool = test_pool().await;
    seed_defaults(&pool).await;

    // Same week, inserted out of order
    time_entry::create(&pool, EMPLOYEE_ID, WORK_TASK_ID, d("2025-04-04"), 8, None).await.unwrap();
    time_entry::create(&pool, EMPLOYEE_ID, WORK_TASK_ID, d("2025-03-31"), 8, None).await.unwrap();
    time_entry::create(&pool, EMPLOYEE_ID, WORK_TASK_ID, d("2025-04-02"), 8, None).await.unwrap();
    // Next week and another user: both excluded
    time_entry::create(&pool, EMPLOYEE_ID, WORK_TASK_ID, d("2025-04-07"), 8, None).await.unwrap();
    time_entry::create(&pool, OTHER_EMPLOYEE_ID, WORK_TASK_ID, d("2025-04-01"), 8, None)
        .await
        .unwrap();

    let entries = time_entry::list_week(&pool, EMPLOYEE_ID, d("2025-04-02")).await.unwrap();

    let dates: Vec<_> = entries.iter().map(|e| e.date).collect();
    assert_eq!(dates, vec![d("2025-03-31"), d("2025-04-02"), d("2025-04-04")]);
    assert!(entries.iter().all(|e| e.user.id == EMPLOYEE_ID));
}
