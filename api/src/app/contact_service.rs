//! Contact service
//!
//! Validates and records contact form submissions, then hands them to the
//! notifier without blocking the response. The database row is the source
//! of truth; a failed notification is logged and dropped.

use std::sync::Arc;

use crate::domain::entities::{ContactMessage, MessageId, NewMessage};
use crate::domain::ports::{MessageRepository, Notifier};
use crate::error::{AppError, DomainError};

/// Service for contact messages.
///
/// The notifier parameter allows `dyn Notifier`, since whether a webhook is
/// configured is only known at startup.
pub struct ContactService<MR, N>
where
    MR: MessageRepository,
    N: Notifier + ?Sized + 'static,
{
    messages: Arc<MR>,
    notifier: Arc<N>,
}

impl<MR, N> ContactService<MR, N>
where
    MR: MessageRepository,
    N: Notifier + ?Sized + 'static,
{
    pub fn new(messages: Arc<MR>, notifier: Arc<N>) -> Self {
        Self { messages, notifier }
    }

    /// Validate and persist a contact form submission.
    ///
    /// Notification delivery runs in the background; its outcome never
    /// affects the returned result.
    pub async fn submit(&self, mut message: NewMessage) -> Result<ContactMessage, AppError> {
        message.name = message.name.trim().to_string();
        message.email = message.email.trim().to_string();
        message.subject = message.subject.trim().to_string();
        message.message = message.message.trim().to_string();

        if message.name.is_empty() || message.email.is_empty() || message.message.is_empty() {
            return Err(AppError::Domain(DomainError::Validation(
                "Name, email, and message are required".to_string(),
            )));
        }
        if !message.email.contains('@') {
            return Err(AppError::Domain(DomainError::Validation(
                "Invalid email address".to_string(),
            )));
        }

        let stored = self.messages.create(&message).await?;

        // Fire and forget, log delivery failures
        let notifier = self.notifier.clone();
        let notify = stored.clone();
        tokio::spawn(async move {
            if let Err(e) = notifier.notify_new_message(&notify).await {
                tracing::warn!(error = %e, message_id = %notify.id, "Failed to deliver contact notification");
            }
        });

        Ok(stored)
    }

    /// List messages newest first, optionally filtered on the read flag
    pub async fn list_messages(&self, read: Option<bool>) -> Result<Vec<ContactMessage>, AppError> {
        Ok(self.messages.list(read).await?)
    }

    /// Set whether a message has been read
    pub async fn set_read(&self, id: &MessageId, read: bool) -> Result<ContactMessage, AppError> {
        Ok(self.messages.set_read(id, read).await?)
    }

    /// Delete a message
    pub async fn delete_message(&self, id: &MessageId) -> Result<(), AppError> {
        Ok(self.messages.delete(id).await?)
    }
}
