//! Testimonial domain entity
//!
//! A quote from a client or collaborator, displayed on the public site
//! once published.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Rating bounds. Values outside the range are clamped, not rejected.
pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

/// Unique identifier for a testimonial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TestimonialId(pub Uuid);

impl TestimonialId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TestimonialId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for TestimonialId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TestimonialId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A testimonial
#[derive(Debug, Clone, Serialize)]
pub struct Testimonial {
    pub id: TestimonialId,
    /// Author's display name
    pub name: String,
    pub role: String,
    pub company: String,
    pub content: String,
    /// 1-5 stars
    pub rating: i32,
    pub image: Option<String>,
    /// Project the testimonial refers to, if any
    pub project: Option<String>,
    pub verified: bool,
    pub published: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Clamp a star rating into the 1-5 range
pub fn clamp_rating(rating: i32) -> i32 {
    rating.clamp(MIN_RATING, MAX_RATING)
}

/// Data needed to create a new testimonial
#[derive(Debug, Clone)]
pub struct NewTestimonial {
    pub name: String,
    pub role: String,
    pub company: String,
    pub content: String,
    pub rating: i32,
    pub image: Option<String>,
    pub project: Option<String>,
    pub verified: bool,
    pub published: bool,
    pub sort_order: i32,
}

/// Field-wise update for a testimonial; `None` leaves the stored value alone.
#[derive(Debug, Clone, Default)]
pub struct TestimonialUpdate {
    pub name: Option<String>,
    pub role: Option<String>,
    pub company: Option<String>,
    pub content: Option<String>,
    pub rating: Option<i32>,
    pub image: Option<Option<String>>,
    pub project: Option<Option<String>>,
    pub verified: Option<bool>,
    pub published: Option<bool>,
    pub sort_order: Option<i32>,
}

impl TestimonialUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.role.is_none()
            && self.company.is_none()
            && self.content.is_none()
            && self.rating.is_none()
            && self.image.is_none()
            && self.project.is_none()
            && self.verified.is_none()
            && self.published.is_none()
            && self.sort_order.is_none()
    }
}
