//! Contact message domain entity
//!
//! A message submitted through the public contact form. Messages are only
//! ever created by visitors and read/managed by the admin.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a contact message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(pub Uuid);

impl MessageId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for MessageId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A contact form submission
#[derive(Debug, Clone, Serialize)]
pub struct ContactMessage {
    pub id: MessageId,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// Whether the admin has seen the message
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// Data needed to record a new contact message
#[derive(Debug, Clone)]
pub struct NewMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}
