//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod notifier;
pub mod repositories;

pub use notifier::Notifier;
pub use repositories::{
    MessageRepository, ProjectRepository, SkillRepository, TestimonialRepository, UserRepository,
};
