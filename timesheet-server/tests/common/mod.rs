//! Shared test fixtures: in-memory database, seed data, mock mailers.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use timesheet_server::notify::Mailer;

/// Fresh in-memory database with migrations applied. Single connection so
/// the in-memory database is shared by every handle.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    sqlx::query("PRAGMA foreign_keys = ON;")
        .execute(&pool)
        .await
        .unwrap();
    sqlx::migrate!("./migrations").run(&pool).await.unwrap();
    pool
}

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub async fn seed_user(
    pool: &SqlitePool,
    id: i64,
    first_name: &str,
    last_name: &str,
    email: &str,
    is_admin: bool,
) {
    sqlx::query("INSERT INTO user (id, first_name, last_name, email, is_admin) VALUES (?, ?, ?, ?, ?)")
        .bind(id)
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .bind(is_admin)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn seed_task(pool: &SqlitePool, id: i64, name: &str, is_time_off: bool) {
    sqlx::query("INSERT INTO task (id, name, is_active, is_time_off) VALUES (?, ?, 1, ?)")
        .bind(id)
        .bind(name)
        .bind(is_time_off)
        .execute(pool)
        .await
        .unwrap();
}

pub const ADMIN_ID: i64 = 1;
pub const EMPLOYEE_ID: i64 = 2;
pub const OTHER_EMPLOYEE_ID: i64 = 3;
pub const WORK_TASK_ID: i64 = 1;
pub const SICK_LEAVE_TASK_ID: i64 = 2;

/// Standard fixture: an admin, two employees, a work task and a time-off
/// task ("Sick Leave").
pub async fn seed_defaults(pool: &SqlitePool) {
    seed_user(pool, ADMIN_ID, "Ada", "Admin", "ada@example.com", true).await;
    seed_user(pool, EMPLOYEE_ID, "Eli", "Employee", "eli@example.com", false).await;
    seed_user(pool, OTHER_EMPLOYEE_ID, "Omar", "Other", "omar@example.com", false).await;
    seed_task(pool, WORK_TASK_ID, "Development", false).await;
    seed_task(pool, SICK_LEAVE_TASK_ID, "Sick Leave", true).await;
}

// ========================================================================
// Mock mailers
// ========================================================================

#[derive(Debug, Clone)]
pub struct SentMail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Records every message and reports successful delivery.
#[derive(Clone, Default)]
pub struct MockMailer {
    pub sent: Arc<Mutex<Vec<SentMail>>>,
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> bool {
        self.sent.lock().unwrap().push(SentMail {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        true
    }
}

/// Records every message and reports failed delivery.
#[derive(Clone, Default)]
pub struct FailingMailer {
    pub attempts: Arc<Mutex<Vec<SentMail>>>,
}

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> bool {
        self.attempts.lock().unwrap().push(SentMail {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        false
    }
}

/// Poll until the worker has delivered `count` messages, then return them.
pub async fn wait_for_sent(sent: &Arc<Mutex<Vec<SentMail>>>, count: usize) -> Vec<SentMail> {
    for _ in 0..100 {
        {
            let messages = sent.lock().unwrap();
            if messages.len() >= count {
                return messages.clone();
            }
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("notification worker did not deliver {count} message(s) in time");
}
