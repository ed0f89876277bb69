//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    ContactMessage, MessageId, NewMessage, NewProject, NewSkill, NewTestimonial, NewUser, Project,
    ProjectId, ProjectUpdate, Skill, SkillId, SkillUpdate, Testimonial, TestimonialId,
    TestimonialUpdate, User, UserId,
};
use crate::domain::ports::{
    MessageRepository, Notifier, ProjectRepository, SkillRepository, TestimonialRepository,
    UserRepository,
};
use crate::error::{DomainError, NotifyError};

// ============================================================================
// In-Memory Project Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryProjectRepository {
    projects: Arc<RwLock<HashMap<ProjectId, Project>>>,
}

impl InMemoryProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn find_by_id(&self, id: &ProjectId) -> Result<Option<Project>, DomainError> {
        let projects = self.projects.read().unwrap();
        Ok(projects.get(id).cloned())
    }

    async fn list(&self, published: Option<bool>) -> Result<Vec<Project>, DomainError> {
        let projects = self.projects.read().unwrap();
        let mut items: Vec<_> = projects
            .values()
            .filter(|p| published.map_or(true, |want| p.published == want))
            .cloned()
            .collect();
        items.sort_by(|a, b| {
            a.sort_order
                .cmp(&b.sort_order)
                .then(b.created_at.cmp(&a.created_at))
        });
        Ok(items)
    }

    async fn create(&self, new_project: &NewProject) -> Result<Project, DomainError> {
        let now = Utc::now();
        let project = Project {
            id: ProjectId::new(),
            title: new_project.title.clone(),
            description: new_project.description.clone(),
            long_description: new_project.long_description.clone(),
            image: new_project.image.clone(),
            images: new_project.images.clone(),
            tags: new_project.tags.clone(),
            tech_stack: new_project.tech_stack.clone(),
            languages: new_project.languages.clone(),
            status: new_project.status,
            difficulty: new_project.difficulty,
            category: new_project.category,
            live_url: new_project.live_url.clone(),
            github_url: new_project.github_url.clone(),
            featured: new_project.featured,
            year: new_project.year,
            duration: new_project.duration.clone(),
            team_size: new_project.team_size,
            role: new_project.role.clone(),
            challenges: new_project.challenges.clone(),
            solutions: new_project.solutions.clone(),
            results: new_project.results.clone(),
            metrics: new_project.metrics.clone(),
            published: new_project.published,
            sort_order: new_project.sort_order,
            created_at: now,
            updated_at: now,
        };

        let mut projects = self.projects.write().unwrap();
        projects.insert(project.id, project.clone());
        Ok(project)
    }

    async fn update(
        &self,
        id: &ProjectId,
        update: &ProjectUpdate,
    ) -> Result<Project, DomainError> {
        let mut projects = self.projects.write().unwrap();
        let project = projects
            .get_mut(id)
            .ok_or_else(|| DomainError::NotFound(format!("Project {} not found", id)))?;

        if let Some(title) = &update.title {
            project.title = title.clone();
        }
        if let Some(description) = &update.description {
            project.description = description.clone();
        }
        if let Some(long_description) = &update.long_description {
            project.long_description = long_description.clone();
        }
        if let Some(image) = &update.image {
            project.image = image.clone();
        }
        if let Some(images) = &update.images {
            project.images = images.clone();
        }
        if let Some(tags) = &update.tags {
            project.tags = tags.clone();
        }
        if let Some(tech_stack) = &update.tech_stack {
            project.tech_stack = tech_stack.clone();
        }
        if let Some(languages) = &update.languages {
            project.languages = languages.clone();
        }
        if let Some(status) = update.status {
            project.status = status;
        }
        if let Some(difficulty) = update.difficulty {
            project.difficulty = difficulty;
        }
        if let Some(category) = update.category {
            project.category = category;
        }
        if let Some(live_url) = &update.live_url {
            project.live_url = live_url.clone();
        }
        if let Some(github_url) = &update.github_url {
            project.github_url = github_url.clone();
        }
        if let Some(featured) = update.featured {
            project.featured = featured;
        }
        if let Some(year) = update.year {
            project.year = year;
        }
        if let Some(duration) = &update.duration {
            project.duration = duration.clone();
        }
        if let Some(team_size) = update.team_size {
            project.team_size = team_size;
        }
        if let Some(role) = &update.role {
            project.role = role.clone();
        }
        if let Some(challenges) = &update.challenges {
            project.challenges = challenges.clone();
        }
        if let Some(solutions) = &update.solutions {
            project.solutions = solutions.clone();
        }
        if let Some(results) = &update.results {
            project.results = results.clone();
        }
        if let Some(metrics) = &update.metrics {
            project.metrics = metrics.clone();
        }
        if let Some(published) = update.published {
            project.published = published;
        }
        if let Some(sort_order) = update.sort_order {
            project.sort_order = sort_order;
        }
        project.updated_at = Utc::now();

        Ok(project.clone())
    }

    async fn delete(&self, id: &ProjectId) -> Result<(), DomainError> {
        let mut projects = self.projects.write().unwrap();
        projects
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound(format!("Project {} not found", id)))
    }
}

// ============================================================================
// In-Memory Skill Repository
// ============================================================================

#[derive(Default)]
pub struct InMemorySkillRepository {
    skills: Arc<RwLock<HashMap<SkillId, Skill>>>,
}

impl InMemorySkillRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SkillRepository for InMemorySkillRepository {
    async fn find_by_id(&self, id: &SkillId) -> Result<Option<Skill>, DomainError> {
        let skills = self.skills.read().unwrap();
        Ok(skills.get(id).cloned())
    }

    async fn list(&self, published: Option<bool>) -> Result<Vec<Skill>, DomainError> {
        let skills = self.skills.read().unwrap();
        let mut items: Vec<_> = skills
            .values()
            .filter(|s| published.map_or(true, |want| s.published == want))
            .cloned()
            .collect();
        items.sort_by(|a, b| a.sort_order.cmp(&b.sort_order).then(a.name.cmp(&b.name)));
        Ok(items)
    }

    async fn create(&self, new_skill: &NewSkill) -> Result<Skill, DomainError> {
        let now = Utc::now();
        let skill = Skill {
            id: SkillId::new(),
            name: new_skill.name.clone(),
            category: new_skill.category,
            level: new_skill.level,
            years_of_experience: new_skill.years_of_experience,
            icon: new_skill.icon.clone(),
            description: new_skill.description.clone(),
            published: new_skill.published,
            sort_order: new_skill.sort_order,
            created_at: now,
            updated_at: now,
        };

        let mut skills = self.skills.write().unwrap();
        skills.insert(skill.id, skill.clone());
        Ok(skill)
    }

    async fn update(&self, id: &SkillId, update: &SkillUpdate) -> Result<Skill, DomainError> {
        let mut skills = self.skills.write().unwrap();
        let skill = skills
            .get_mut(id)
            .ok_or_else(|| DomainError::NotFound(format!("Skill {} not found", id)))?;

        if let Some(name) = &update.name {
            skill.name = name.clone();
        }
        if let Some(category) = update.category {
            skill.category = category;
        }
        if let Some(level) = update.level {
            skill.level = level;
        }
        if let Some(years) = update.years_of_experience {
            skill.years_of_experience = years;
        }
        if let Some(icon) = &update.icon {
            skill.icon = icon.clone();
        }
        if let Some(description) = &update.description {
            skill.description = description.clone();
        }
        if let Some(published) = update.published {
            skill.published = published;
        }
        if let Some(sort_order) = update.sort_order {
            skill.sort_order = sort_order;
        }
        skill.updated_at = Utc::now();

        Ok(skill.clone())
    }

    async fn delete(&self, id: &SkillId) -> Result<(), DomainError> {
        let mut skills = self.skills.write().unwrap();
        skills
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound(format!("Skill {} not found", id)))
    }
}

// ============================================================================
// In-Memory Testimonial Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryTestimonialRepository {
    testimonials: Arc<RwLock<HashMap<TestimonialId, Testimonial>>>,
}

impl InMemoryTestimonialRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TestimonialRepository for InMemoryTestimonialRepository {
    async fn find_by_id(&self, id: &TestimonialId) -> Result<Option<Testimonial>, DomainError> {
        let testimonials = self.testimonials.read().unwrap();
        Ok(testimonials.get(id).cloned())
    }

    async fn list(&self, published: Option<bool>) -> Result<Vec<Testimonial>, DomainError> {
        let testimonials = self.testimonials.read().unwrap();
        let mut items: Vec<_> = testimonials
            .values()
            .filter(|t| published.map_or(true, |want| t.published == want))
            .cloned()
            .collect();
        items.sort_by(|a, b| {
            a.sort_order
                .cmp(&b.sort_order)
                .then(b.created_at.cmp(&a.created_at))
        });
        Ok(items)
    }

    async fn create(&self, new_testimonial: &NewTestimonial) -> Result<Testimonial, DomainError> {
        let now = Utc::now();
        let testimonial = Testimonial {
            id: TestimonialId::new(),
            name: new_testimonial.name.clone(),
            role: new_testimonial.role.clone(),
            company: new_testimonial.company.clone(),
            content: new_testimonial.content.clone(),
            rating: new_testimonial.rating,
            image: new_testimonial.image.clone(),
            project: new_testimonial.project.clone(),
            verified: new_testimonial.verified,
            published: new_testimonial.published,
            sort_order: new_testimonial.sort_order,
            created_at: now,
            updated_at: now,
        };

        let mut testimonials = self.testimonials.write().unwrap();
        testimonials.insert(testimonial.id, testimonial.clone());
        Ok(testimonial)
    }

    async fn update(
        &self,
        id: &TestimonialId,
        update: &TestimonialUpdate,
    ) -> Result<Testimonial, DomainError> {
        let mut testimonials = self.testimonials.write().unwrap();
        let testimonial = testimonials
            .get_mut(id)
            .ok_or_else(|| DomainError::NotFound(format!("Testimonial {} not found", id)))?;

        if let Some(name) = &update.name {
            testimonial.name = name.clone();
        }
        if let Some(role) = &update.role {
            testimonial.role = role.clone();
        }
        if let Some(company) = &update.company {
            testimonial.company = company.clone();
        }
        if let Some(content) = &update.content {
            testimonial.content = content.clone();
        }
        if let Some(rating) = update.rating {
            testimonial.rating = rating;
        }
        if let Some(image) = &update.image {
            testimonial.image = image.clone();
        }
        if let Some(project) = &update.project {
            testimonial.project = project.clone();
        }
        if let Some(verified) = update.verified {
            testimonial.verified = verified;
        }
        if let Some(published) = update.published {
            testimonial.published = published;
        }
        if let Some(sort_order) = update.sort_order {
            testimonial.sort_order = sort_order;
        }
        testimonial.updated_at = Utc::now();

        Ok(testimonial.clone())
    }

    async fn delete(&self, id: &TestimonialId) -> Result<(), DomainError> {
        let mut testimonials = self.testimonials.write().unwrap();
        testimonials
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound(format!("Testimonial {} not found", id)))
    }
}

// ============================================================================
// In-Memory Message Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryMessageRepository {
    messages: Arc<RwLock<HashMap<MessageId, ContactMessage>>>,
}

impl InMemoryMessageRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn find_by_id(&self, id: &MessageId) -> Result<Option<ContactMessage>, DomainError> {
        let messages = self.messages.read().unwrap();
        Ok(messages.get(id).cloned())
    }

    async fn list(&self, read: Option<bool>) -> Result<Vec<ContactMessage>, DomainError> {
        let messages = self.messages.read().unwrap();
        let mut items: Vec<_> = messages
            .values()
            .filter(|m| read.map_or(true, |want| m.read == want))
            .cloned()
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items)
    }

    async fn create(&self, new_message: &NewMessage) -> Result<ContactMessage, DomainError> {
        let message = ContactMessage {
            id: MessageId::new(),
            name: new_message.name.clone(),
            email: new_message.email.clone(),
            subject: new_message.subject.clone(),
            message: new_message.message.clone(),
            read: false,
            created_at: Utc::now(),
        };

        let mut messages = self.messages.write().unwrap();
        messages.insert(message.id, message.clone());
        Ok(message)
    }

    async fn set_read(&self, id: &MessageId, read: bool) -> Result<ContactMessage, DomainError> {
        let mut messages = self.messages.write().unwrap();
        let message = messages
            .get_mut(id)
            .ok_or_else(|| DomainError::NotFound(format!("Message {} not found", id)))?;
        message.read = read;
        Ok(message.clone())
    }

    async fn delete(&self, id: &MessageId) -> Result<(), DomainError> {
        let mut messages = self.messages.write().unwrap();
        messages
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound(format!("Message {} not found", id)))
    }
}

// ============================================================================
// In-Memory User Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a user for testing
    pub async fn insert(&self, user: User) {
        self.users.write().unwrap().insert(user.id, user);
    }

    /// Number of stored users
    pub async fn count(&self) -> usize {
        self.users.read().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let users = self.users.read().unwrap();
        Ok(users.get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().unwrap();
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn create(&self, new_user: &NewUser) -> Result<User, DomainError> {
        let user = User {
            id: UserId::new(),
            email: new_user.email.clone(),
            name: new_user.name.clone(),
            password_hash: new_user.password_hash.clone(),
            role: new_user.role.clone(),
            created_at: Utc::now(),
        };

        let mut users = self.users.write().unwrap();
        users.insert(user.id, user.clone());
        Ok(user)
    }
}

// ============================================================================
// Notifier Mocks
// ============================================================================

/// Notifier that records every message it is asked to deliver
#[derive(Default)]
pub struct RecordingNotifier {
    delivered: Arc<RwLock<Vec<ContactMessage>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages delivered so far
    pub async fn delivered(&self) -> Vec<ContactMessage> {
        self.delivered.read().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify_new_message(&self, message: &ContactMessage) -> Result<(), NotifyError> {
        self.delivered.write().unwrap().push(message.clone());
        Ok(())
    }
}

/// Notifier whose delivery always fails
pub struct FailingNotifier;

#[async_trait]
impl Notifier for FailingNotifier {
    async fn notify_new_message(&self, _message: &ContactMessage) -> Result<(), NotifyError> {
        Err(NotifyError::Status {
            status: 500,
            message: "delivery refused".to_string(),
        })
    }
}
