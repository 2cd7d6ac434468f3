//! Week lock coordinator tests

mod common;

use common::{d, test_pool};
use timesheet_server::db::repository::{RepoError, closed_week};

#[tokio::test]
async fn test_close_week_returns_canonical_start() {
    let pool = test_pool().await;

    // 2025-04-02 is a Wednesday; the week anchors on Sunday 2025-03-30
    let week_start = closed_week::close_week(&pool, d("2025-04-02")).await.unwrap();
    assert_eq!(week_start, d("2025-03-30"));
}

#[tokio::test]
async fn test_status_is_shared_across_the_week() {
    let pool = test_pool().await;

    closed_week::close_week(&pool, d("2025-03-30")).await.unwrap();

    assert!(closed_week::is_closed(&pool, d("2025-04-02")).await.unwrap());
    assert!(closed_week::is_closed(&pool, d("2025-04-05")).await.unwrap());
    // The next week is unaffected
    assert!(!closed_week::is_closed(&pool, d("2025-04-06")).await.unwrap());
}

#[tokio::test]
async fn test_close_twice_fails_and_keeps_one_marker() {
    let pool = test_pool().await;

    closed_week::close_week(&pool, d("2025-03-30")).await.unwrap();

    // Closing again, even via a different date in the same week
    let err = closed_week::close_week(&pool, d("2025-04-01")).await.unwrap_err();
    assert!(matches!(err, RepoError::AlreadyClosed));

    let markers: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM closed_week")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(markers, 1);
}

#[tokio::test]
async fn test_open_week_removes_the_marker() {
    let pool = test_pool().await;

    closed_week::close_week(&pool, d("2025-03-30")).await.unwrap();
    let week_start = closed_week::open_week(&pool, d("2025-04-03")).await.unwrap();

    assert_eq!(week_start, d("2025-03-30"));
    assert!(!closed_week::is_closed(&pool, d("2025-03-30")).await.unwrap());
}

#[tokio::test]
async fn test_open_week_that_is_not_closed_fails() {
    let pool = test_pool().await;

    let err = closed_week::open_week(&pool, d("2025-03-30")).await.unwrap_err();
    assert!(matches!(err, RepoError::NotClosed));
}

#[tokio::test]
async fn test_reclosing_after_open_succeeds() {
    let pool = test_pool().await;

    closed_week::close_week(&pool, d("2025-03-30")).await.unwrap();
    closed_week::open_week(&pool, d("2025-03-30")).await.unwrap();
    closed_week::close_week(&pool, d("2025-03-30")).await.unwrap();

    assert!(closed_week::is_closed(&pool, d("2025-03-30")).await.unwrap());
}
