//! Notification background worker
//!
//! Consumes notifications from the mpsc channel and hands them to the
//! mailer. Exits when the channel closes.

use std::sync::Arc;

use super::{Mailer, Notification};

pub struct NotificationWorker {
    mailer: Arc<dyn Mailer>,
}

impl NotificationWorker {
    pub fn new(mailer: Arc<dyn Mailer>) -> Self {
        Self { mailer }
    }

    /// Run the worker (blocks until the channel closes)
    pub async fn run(self, mut rx: tokio::sync::mpsc::Receiver<Notification>) {
        tracing::info!("Notification worker started");

        while let Some(notification) = rx.recv().await {
            let delivered = self
                .mailer
                .send(&notification.to, &notification.subject, &notification.body)
                .await;

            if delivered {
                tracing::debug!(
                    to = %notification.to,
                    subject = %notification.subject,
                    "Notification delivered"
                );
            } else {
                tracing::error!(
                    to = %notification.to,
                    subject = %notification.subject,
                    "Failed to deliver notification"
                );
            }
        }

        tracing::info!("Notification channel closed, worker stopping");
    }
}
