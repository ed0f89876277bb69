//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod message;
pub mod project;
pub mod skill;
pub mod testimonial;
pub mod user;

pub use message::{ContactMessage, MessageId, NewMessage};
pub use project::{
    Difficulty, NewProject, Project, ProjectCategory, ProjectId, ProjectMetric, ProjectStatus,
    ProjectUpdate,
};
pub use skill::{clamp_level, NewSkill, Skill, SkillCategory, SkillId, SkillUpdate};
pub use testimonial::{
    clamp_rating, NewTestimonial, Testimonial, TestimonialId, TestimonialUpdate,
};
pub use user::{NewUser, User, UserId, UserProfile};
