//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod auth;
pub mod contact;
pub mod messages;
pub mod projects;
pub mod skills;
pub mod testimonials;

pub use auth::{login, verify};
pub use contact::submit_contact;
pub use messages::{delete_message, list_messages, update_message};
pub use projects::{
    create_project, delete_project, get_project, get_public_project, list_projects,
    list_public_projects, update_project,
};
pub use skills::{
    create_skill, delete_skill, get_skill, list_public_skills, list_skills, update_skill,
};
pub use testimonials::{
    create_testimonial, delete_testimonial, get_testimonial, list_public_testimonials,
    list_testimonials, update_testimonial,
};

use serde::{Deserialize, Deserializer};

/// Deserialize a doubly-optional update field: an absent field stays `None`
/// (keep the stored value), an explicit `null` becomes `Some(None)` (clear it).
pub(crate) fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(de).map(Some)
}
