//! Webhook notifier implementation
//!
//! Posts new contact messages as JSON to a configured webhook URL
//! (Discord/Slack-style). Used so messages reach the owner without
//! polling the admin panel.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::domain::entities::ContactMessage;
use crate::domain::ports::Notifier;
use crate::error::NotifyError;

/// Payload posted to the webhook
#[derive(Debug, Serialize)]
struct MessagePayload<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
}

/// Notifier that delivers messages to an HTTP webhook
pub struct WebhookNotifier {
    http: Client,
    url: String,
}

impl WebhookNotifier {
    pub fn new(url: String) -> Self {
        Self {
            http: Client::new(),
            url,
        }
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn notify_new_message(&self, message: &ContactMessage) -> Result<(), NotifyError> {
        let payload = MessagePayload {
            name: &message.name,
            email: &message.email,
            subject: &message.subject,
            message: &message.message,
        };

        let resp = self.http.post(&self.url).json(&payload).send().await?;

        if resp.status().is_success() {
            Ok(())
        } else {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            Err(NotifyError::Status { status, message })
        }
    }
}

/// A no-op notifier for testing or when no webhook URL is configured
pub struct NoopNotifier;

#[async_trait]
impl Notifier for NoopNotifier {
    async fn notify_new_message(&self, _message: &ContactMessage) -> Result<(), NotifyError> {
        Ok(())
    }
}
