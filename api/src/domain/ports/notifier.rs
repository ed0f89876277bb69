//! Notifier port trait
//!
//! Defines the interface for pushing new contact messages somewhere the
//! site owner will actually see them (e.g. a chat webhook). Delivery is
//! best-effort: the database row is the source of truth.

use async_trait::async_trait;

use crate::domain::entities::ContactMessage;
use crate::error::NotifyError;

/// Outbound notification channel for contact messages
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver a notification for a freshly submitted message
    async fn notify_new_message(&self, message: &ContactMessage) -> Result<(), NotifyError>;
}
