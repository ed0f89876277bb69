//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{
    ContactMessage, MessageId, NewMessage, NewProject, NewSkill, NewTestimonial, NewUser, Project,
    ProjectId, ProjectUpdate, Skill, SkillId, SkillUpdate, Testimonial, TestimonialId,
    TestimonialUpdate, User, UserId,
};
use crate::error::DomainError;

/// Repository for Project entities
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Find a project by ID
    async fn find_by_id(&self, id: &ProjectId) -> Result<Option<Project>, DomainError>;

    /// List projects, optionally filtered on the published flag.
    /// Ordered by sort_order asc, then created_at desc.
    async fn list(&self, published: Option<bool>) -> Result<Vec<Project>, DomainError>;

    /// Create a new project
    async fn create(&self, project: &NewProject) -> Result<Project, DomainError>;

    /// Apply a field-wise update; absent fields keep their stored values
    async fn update(&self, id: &ProjectId, update: &ProjectUpdate)
        -> Result<Project, DomainError>;

    /// Delete a project
    async fn delete(&self, id: &ProjectId) -> Result<(), DomainError>;
}

/// Repository for Skill entities
#[async_trait]
pub trait SkillRepository: Send + Sync {
    /// Find a skill by ID
    async fn find_by_id(&self, id: &SkillId) -> Result<Option<Skill>, DomainError>;

    /// List skills, optionally filtered on the published flag.
    /// Ordered by sort_order asc, then name asc.
    async fn list(&self, published: Option<bool>) -> Result<Vec<Skill>, DomainError>;

    /// Create a new skill
    async fn create(&self, skill: &NewSkill) -> Result<Skill, DomainError>;

    /// Apply a field-wise update; absent fields keep their stored values
    async fn update(&self, id: &SkillId, update: &SkillUpdate) -> Result<Skill, DomainError>;

    /// Delete a skill
    async fn delete(&self, id: &SkillId) -> Result<(), DomainError>;
}

/// Repository for Testimonial entities
#[async_trait]
pub trait TestimonialRepository: Send + Sync {
    /// Find a testimonial by ID
    async fn find_by_id(&self, id: &TestimonialId) -> Result<Option<Testimonial>, DomainError>;

    /// List testimonials, optionally filtered on the published flag.
    /// Ordered by sort_order asc, then created_at desc.
    async fn list(&self, published: Option<bool>) -> Result<Vec<Testimonial>, DomainError>;

    /// Create a new testimonial
    async fn create(&self, testimonial: &NewTestimonial) -> Result<Testimonial, DomainError>;

    /// Apply a field-wise update; absent fields keep their stored values
    async fn update(
        &self,
        id: &TestimonialId,
        update: &TestimonialUpdate,
    ) -> Result<Testimonial, DomainError>;

    /// Delete a testimonial
    async fn delete(&self, id: &TestimonialId) -> Result<(), DomainError>;
}

/// Repository for contact messages
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Find a message by ID
    async fn find_by_id(&self, id: &MessageId) -> Result<Option<ContactMessage>, DomainError>;

    /// List messages newest first, optionally filtered on the read flag
    async fn list(&self, read: Option<bool>) -> Result<Vec<ContactMessage>, DomainError>;

    /// Record a new message (read starts false)
    async fn create(&self, message: &NewMessage) -> Result<ContactMessage, DomainError>;

    /// Set the read flag
    async fn set_read(&self, id: &MessageId, read: bool) -> Result<ContactMessage, DomainError>;

    /// Delete a message
    async fn delete(&self, id: &MessageId) -> Result<(), DomainError>;
}

/// Repository for admin users
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by ID
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Find a user by email (login lookup)
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Create a user account
    async fn create(&self, user: &NewUser) -> Result<User, DomainError>;
}
