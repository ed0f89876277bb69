//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod message_repo;
pub mod project_repo;
pub mod skill_repo;
pub mod testimonial_repo;
pub mod user_repo;

#[cfg(test)]
mod integration_tests;

pub use message_repo::PostgresMessageRepository;
pub use project_repo::PostgresProjectRepository;
pub use skill_repo::PostgresSkillRepository;
pub use testimonial_repo::PostgresTestimonialRepository;
pub use user_repo::PostgresUserRepository;
