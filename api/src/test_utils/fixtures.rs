//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use chrono::Utc;

use crate::domain::entities::{
    Difficulty, NewMessage, NewProject, NewSkill, NewTestimonial, ProjectCategory, ProjectStatus,
    SkillCategory, User, UserId,
};

/// Create a test admin user with the given email
pub fn test_user(email: &str) -> User {
    User {
        id: UserId::new(),
        email: email.to_string(),
        name: "Test Admin".to_string(),
        password_hash: "$2b$12$placeholder-hash".to_string(),
        role: "admin".to_string(),
        created_at: Utc::now(),
    }
}

/// Create a new-project payload with the given title
pub fn test_new_project(title: &str) -> NewProject {
    NewProject {
        title: title.to_string(),
        description: "A test project".to_string(),
        long_description: None,
        image: "/images/test.png".to_string(),
        images: vec![],
        tags: vec![],
        tech_stack: vec!["axum".to_string()],
        languages: vec!["rust".to_string()],
        status: ProjectStatus::Completed,
        difficulty: Difficulty::Intermediate,
        category: ProjectCategory::Backend,
        live_url: None,
        github_url: None,
        featured: false,
        year: 2024,
        duration: None,
        team_size: None,
        role: None,
        challenges: vec![],
        solutions: vec![],
        results: vec![],
        metrics: vec![],
        published: false,
        sort_order: 0,
    }
}

/// Create a new-skill payload with the given name
pub fn test_new_skill(name: &str) -> NewSkill {
    NewSkill {
        name: name.to_string(),
        category: SkillCategory::Backend,
        level: 80,
        years_of_experience: 3,
        icon: None,
        description: None,
        published: false,
        sort_order: 0,
    }
}

/// Create a new-testimonial payload with the given author name
pub fn test_new_testimonial(name: &str) -> NewTestimonial {
    NewTestimonial {
        name: name.to_string(),
        role: "CTO".to_string(),
        company: "Acme".to_string(),
        content: "Great to work with.".to_string(),
        rating: 5,
        image: None,
        project: None,
        verified: false,
        published: false,
        sort_order: 0,
    }
}

/// Create a contact form payload from the given sender
pub fn test_new_message(name: &str) -> NewMessage {
    NewMessage {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        subject: "Hello".to_string(),
        message: "I'd like to talk about a project.".to_string(),
    }
}
