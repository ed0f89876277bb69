//! Portfolio service
//!
//! Use cases for the portfolio content types (projects, skills,
//! testimonials): published-only reads for the public site and full CRUD
//! for the admin panel. Numeric fields with a defined range (skill level,
//! testimonial rating) are clamped here rather than rejected.

use std::sync::Arc;

use crate::domain::entities::{
    clamp_level, clamp_rating, NewProject, NewSkill, NewTestimonial, Project, ProjectId,
    ProjectUpdate, Skill, SkillId, SkillUpdate, Testimonial, TestimonialId, TestimonialUpdate,
};
use crate::domain::ports::{ProjectRepository, SkillRepository, TestimonialRepository};
use crate::error::{AppError, DomainError};

/// Service for managing portfolio content
pub struct PortfolioService<PR, SR, TR>
where
    PR: ProjectRepository,
    SR: SkillRepository,
    TR: TestimonialRepository,
{
    projects: Arc<PR>,
    skills: Arc<SR>,
    testimonials: Arc<TR>,
}

impl<PR, SR, TR> PortfolioService<PR, SR, TR>
where
    PR: ProjectRepository,
    SR: SkillRepository,
    TR: TestimonialRepository,
{
    pub fn new(projects: Arc<PR>, skills: Arc<SR>, testimonials: Arc<TR>) -> Self {
        Self {
            projects,
            skills,
            testimonials,
        }
    }

    // ========================================================================
    // Public reads (published rows only)
    // ========================================================================

    /// List projects visible on the public site
    pub async fn list_public_projects(&self) -> Result<Vec<Project>, AppError> {
        Ok(self.projects.list(Some(true)).await?)
    }

    /// Fetch one public project; drafts are indistinguishable from missing
    pub async fn get_public_project(&self, id: &ProjectId) -> Result<Project, AppError> {
        let project = self.projects.find_by_id(id).await?;
        match project {
            Some(p) if p.is_public() => Ok(p),
            _ => Err(AppError::NotFound(format!("Project {}", id))),
        }
    }

    /// List skills visible on the public site
    pub async fn list_public_skills(&self) -> Result<Vec<Skill>, AppError> {
        Ok(self.skills.list(Some(true)).await?)
    }

    /// List testimonials visible on the public site
    pub async fn list_public_testimonials(&self) -> Result<Vec<Testimonial>, AppError> {
        Ok(self.testimonials.list(Some(true)).await?)
    }

    // ========================================================================
    // Project management
    // ========================================================================

    /// List all projects, optionally filtered on the published flag
    pub async fn list_projects(&self, published: Option<bool>) -> Result<Vec<Project>, AppError> {
        Ok(self.projects.list(published).await?)
    }

    /// Fetch one project regardless of published state
    pub async fn get_project(&self, id: &ProjectId) -> Result<Project, AppError> {
        self.projects
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Project {}", id)))
    }

    /// Create a project
    pub async fn create_project(&self, mut project: NewProject) -> Result<Project, AppError> {
        project.title = project.title.trim().to_string();
        if project.title.is_empty() {
            return Err(AppError::Domain(DomainError::Validation(
                "Title is required".to_string(),
            )));
        }

        Ok(self.projects.create(&project).await?)
    }

    /// Apply a field-wise project update
    pub async fn update_project(
        &self,
        id: &ProjectId,
        mut update: ProjectUpdate,
    ) -> Result<Project, AppError> {
        if let Some(title) = &update.title {
            let title = title.trim().to_string();
            if title.is_empty() {
                return Err(AppError::Domain(DomainError::Validation(
                    "Title cannot be empty".to_string(),
                )));
            }
            update.title = Some(title);
        }

        Ok(self.projects.update(id, &update).await?)
    }

    /// Delete a project
    pub async fn delete_project(&self, id: &ProjectId) -> Result<(), AppError> {
        Ok(self.projects.delete(id).await?)
    }

    // ========================================================================
    // Skill management
    // ========================================================================

    /// List all skills, optionally filtered on the published flag
    pub async fn list_skills(&self, published: Option<bool>) -> Result<Vec<Skill>, AppError> {
        Ok(self.skills.list(published).await?)
    }

    /// Fetch one skill regardless of published state
    pub async fn get_skill(&self, id: &SkillId) -> Result<Skill, AppError> {
        self.skills
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Skill {}", id)))
    }

    /// Create a skill; the level is clamped to 1-100
    pub async fn create_skill(&self, mut skill: NewSkill) -> Result<Skill, AppError> {
        skill.name = skill.name.trim().to_string();
        if skill.name.is_empty() {
            return Err(AppError::Domain(DomainError::Validation(
                "Name is required".to_string(),
            )));
        }
        skill.level = clamp_level(skill.level);

        Ok(self.skills.create(&skill).await?)
    }

    /// Apply a field-wise skill update; a level, if present, is clamped
    pub async fn update_skill(
        &self,
        id: &SkillId,
        mut update: SkillUpdate,
    ) -> Result<Skill, AppError> {
        if let Some(name) = &update.name {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(AppError::Domain(DomainError::Validation(
                    "Name cannot be empty".to_string(),
                )));
            }
            update.name = Some(name);
        }
        update.level = update.level.map(clamp_level);

        Ok(self.skills.update(id, &update).await?)
    }

    /// Delete a skill
    pub async fn delete_skill(&self, id: &SkillId) -> Result<(), AppError> {
        Ok(self.skills.delete(id).await?)
    }

    // ========================================================================
    // Testimonial management
    // ========================================================================

    /// List all testimonials, optionally filtered on the published flag
    pub async fn list_testimonials(
        &self,
        published: Option<bool>,
    ) -> Result<Vec<Testimonial>, AppError> {
        Ok(self.testimonials.list(published).await?)
    }

    /// Fetch one testimonial regardless of published state
    pub async fn get_testimonial(&self, id: &TestimonialId) -> Result<Testimonial, AppError> {
        self.testimonials
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Testimonial {}", id)))
    }

    /// Create a testimonial; the rating is clamped to 1-5
    pub async fn create_testimonial(
        &self,
        mut testimonial: NewTestimonial,
    ) -> Result<Testimonial, AppError> {
        testimonial.name = testimonial.name.trim().to_string();
        if testimonial.name.is_empty() {
            return Err(AppError::Domain(DomainError::Validation(
                "Name is required".to_string(),
            )));
        }
        if testimonial.content.trim().is_empty() {
            return Err(AppError::Domain(DomainError::Validation(
                "Content is required".to_string(),
            )));
        }
        testimonial.rating = clamp_rating(testimonial.rating);

        Ok(self.testimonials.create(&testimonial).await?)
    }

    /// Apply a field-wise testimonial update; a rating, if present, is clamped
    pub async fn update_testimonial(
        &self,
        id: &TestimonialId,
        mut update: TestimonialUpdate,
    ) -> Result<Testimonial, AppError> {
        update.rating = update.rating.map(clamp_rating);

        Ok(self.testimonials.update(id, &update).await?)
    }

    /// Delete a testimonial
    pub async fn delete_testimonial(&self, id: &TestimonialId) -> Result<(), AppError> {
        Ok(self.testimonials.delete(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::SkillCategory;
    use crate::test_utils::{
        test_new_project, test_new_skill, test_new_testimonial, InMemoryProjectRepository,
        InMemorySkillRepository, InMemoryTestimonialRepository,
    };

    fn create_service() -> PortfolioService<
        InMemoryProjectRepository,
        InMemorySkillRepository,
        InMemoryTestimonialRepository,
    > {
        PortfolioService::new(
            Arc::new(InMemoryProjectRepository::new()),
            Arc::new(InMemorySkillRepository::new()),
            Arc::new(InMemoryTestimonialRepository::new()),
        )
    }

    #[tokio::test]
    async fn public_projects_exclude_drafts() {
        let service = create_service();

        let mut published = test_new_project("shipped");
        published.published = true;
        service.create_project(published).await.unwrap();

        let mut draft = test_new_project("draft");
        draft.published = false;
        let draft = service.create_project(draft).await.unwrap();

        let public = service.list_public_projects().await.unwrap();
        assert_eq!(public.len(), 1);
        assert_eq!(public[0].title, "shipped");

        let all = service.list_projects(None).await.unwrap();
        assert_eq!(all.len(), 2);

        // The draft 404s on the public path but resolves on the admin path
        assert!(service.get_public_project(&draft.id).await.is_err());
        assert!(service.get_project(&draft.id).await.is_ok());
    }

    #[tokio::test]
    async fn create_project_requires_title() {
        let service = create_service();

        let mut project = test_new_project("  ");
        project.title = "   ".to_string();
        let err = service.create_project(project).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Domain(DomainError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn update_project_partial_keeps_arrays() {
        let service = create_service();

        let mut project = test_new_project("arrays");
        project.tags = vec!["a".to_string(), "b".to_string()];
        project.published = true;
        let created = service.create_project(project).await.unwrap();

        let update = ProjectUpdate {
            published: Some(false),
            ..Default::default()
        };
        let updated = service.update_project(&created.id, update).await.unwrap();

        assert!(!updated.published);
        assert_eq!(updated.tags, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn update_missing_project_not_found() {
        let service = create_service();
        let err = service
            .update_project(&ProjectId::new(), ProjectUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Domain(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_project_then_gone() {
        let service = create_service();
        let created = service
            .create_project(test_new_project("to-delete"))
            .await
            .unwrap();

        service.delete_project(&created.id).await.unwrap();
        assert!(service.get_project(&created.id).await.is_err());

        let err = service.delete_project(&created.id).await.unwrap_err();
        assert!(matches!(err, AppError::Domain(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn skill_level_is_clamped() {
        let service = create_service();

        let mut skill = test_new_skill("Rust");
        skill.level = 250;
        let created = service.create_skill(skill).await.unwrap();
        assert_eq!(created.level, 100);

        let update = SkillUpdate {
            level: Some(-10),
            ..Default::default()
        };
        let updated = service.update_skill(&created.id, update).await.unwrap();
        assert_eq!(updated.level, 1);
        assert_eq!(updated.name, "Rust");
    }

    #[tokio::test]
    async fn skill_filter_and_category() {
        let service = create_service();

        let mut skill = test_new_skill("PostgreSQL");
        skill.category = SkillCategory::Database;
        skill.published = false;
        service.create_skill(skill).await.unwrap();

        assert!(service.list_public_skills().await.unwrap().is_empty());
        let drafts = service.list_skills(Some(false)).await.unwrap();
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].category, SkillCategory::Database);
    }

    #[tokio::test]
    async fn testimonial_rating_is_clamped() {
        let service = create_service();

        let mut testimonial = test_new_testimonial("Happy Client");
        testimonial.rating = 99;
        let created = service.create_testimonial(testimonial).await.unwrap();
        assert_eq!(created.rating, 5);
    }

    #[tokio::test]
    async fn testimonial_requires_content() {
        let service = create_service();

        let mut testimonial = test_new_testimonial("Quiet Client");
        testimonial.content = " ".to_string();
        let err = service.create_testimonial(testimonial).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Domain(DomainError::Validation(_))
        ));
    }
}
