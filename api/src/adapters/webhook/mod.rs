//! Webhook adapter
//!
//! Implementation of the notifier port over a plain HTTP webhook.

pub mod notifier;

pub use notifier::{NoopNotifier, WebhookNotifier};
