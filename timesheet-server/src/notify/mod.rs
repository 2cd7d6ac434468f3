//! Notification Module
//!
//! Fire-and-forget email notification. Decisions enqueue a message after
//! their transaction commits; a background worker drains the queue and
//! hands each message to the configured [`Mailer`]. Delivery failure is
//! logged and never reaches the caller.

pub mod worker;

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::db::repository::time_off_request::TimeOffDecision;
use worker::NotificationWorker;

/// Outbound mail transport. Returns whether delivery succeeded.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, to: &str, subject: &str, body: &str) -> bool;
}

/// Default transport: writes the message to the log instead of sending it.
/// Stands in until a real SMTP relay is wired up.
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> bool {
        tracing::info!(to = %to, subject = %subject, body = %body, "Outbound notification");
        true
    }
}

/// One outbound message
#[derive(Debug, Clone)]
pub struct Notification {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Handle to the notification queue - cheap to clone
#[derive(Clone)]
pub struct NotifyService {
    tx: mpsc::Sender<Notification>,
}

impl NotifyService {
    /// Spawn the background worker and return the queue handle.
    pub fn start(mailer: Arc<dyn Mailer>, queue_size: usize) -> Self {
        let (tx, rx) = mpsc::channel(queue_size);
        tokio::spawn(NotificationWorker::new(mailer).run(rx));
        Self { tx }
    }

    /// Enqueue without waiting. A full or closed queue drops the message
    /// with an error log; the caller's result is already committed.
    pub fn enqueue(&self, notification: Notification) {
        if let Err(e) = self.tx.try_send(notification) {
            tracing::error!("Failed to enqueue notification: {e}");
        }
    }
}

const STATUS_SUBJECT: &str = "Your Time Off Request Status Update";

/// Approval email for the owner of the decided request.
pub fn approval_notification(decision: &TimeOffDecision) -> Notification {
    Notification {
        to: decision.user_email.clone(),
        subject: STATUS_SUBJECT.to_string(),
        body: format!(
            "Hello {},\n\nYour time off request has been approved.\nDate: {}\nHours: {}\nComment: {}",
            decision.user_first_name,
            decision.date,
            decision.hours,
            decision.comment.as_deref().unwrap_or(""),
        ),
    }
}

/// Rejection email; `admin_comment` is the reason extracted from the
/// rejection payload.
pub fn rejection_notification(decision: &TimeOffDecision, admin_comment: &str) -> Notification {
    Notification {
        to: decision.user_email.clone(),
        subject: STATUS_SUBJECT.to_string(),
        body: format!(
            "Hello {},\n\nYour time off request has been rejected.\nReason: {}\n\nFor Request:\nDate: {}\nHours: {}\nComment: {}",
            decision.user_first_name,
            admin_comment,
            decision.date,
            decision.hours,
            decision.comment.as_deref().unwrap_or(""),
        ),
    }
}

/// The reviewer's reason travels inside the rejection comment after a
/// "[RejectMessage] - " marker. Missing marker or empty tail reads as
/// "None".
pub fn extract_admin_comment(comment: Option<&str>) -> String {
    let Some(comment) = comment else {
        return "None".to_string();
    };
    match comment.split_once("[RejectMessage] - ") {
        Some((before, after)) if !before.is_empty() && !after.is_empty() => {
            after.trim().to_string()
        }
        _ => "None".to_string(),
    }
}
