//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod postgres;
pub mod webhook;

pub use postgres::{
    PostgresMessageRepository, PostgresProjectRepository, PostgresSkillRepository,
    PostgresTestimonialRepository, PostgresUserRepository,
};
pub use webhook::{NoopNotifier, WebhookNotifier};
