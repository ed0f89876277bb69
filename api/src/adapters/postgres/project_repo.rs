//! PostgreSQL adapter for ProjectRepository
//!
//! The projects table keeps its array-ish fields as JSON-encoded strings in
//! TEXT columns; encoding/decoding happens here so neither the domain nor
//! the handlers ever see the raw strings.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::entities::{
    Difficulty, NewProject, Project, ProjectCategory, ProjectId, ProjectStatus, ProjectUpdate,
};
use crate::domain::ports::ProjectRepository;
use crate::entity::projects;
use crate::error::DomainError;

/// Encode a list field for storage in a TEXT column
fn encode_column<T: Serialize>(values: &[T]) -> String {
    serde_json::to_string(values).unwrap_or_else(|_| "[]".to_string())
}

/// Decode a TEXT column back into a list. Corrupt or empty column text
/// decodes to an empty vec rather than failing the whole row.
fn decode_column<T: DeserializeOwned>(raw: &str) -> Vec<T> {
    serde_json::from_str(raw).unwrap_or_default()
}

/// PostgreSQL implementation of ProjectRepository
pub struct PostgresProjectRepository {
    db: DatabaseConnection,
}

impl PostgresProjectRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectRepository for PostgresProjectRepository {
    async fn find_by_id(&self, id: &ProjectId) -> Result<Option<Project>, DomainError> {
        let result = projects::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn list(&self, published: Option<bool>) -> Result<Vec<Project>, DomainError> {
        let mut query = projects::Entity::find();

        if let Some(published) = published {
            query = query.filter(projects::Column::Published.eq(published));
        }

        let results = query
            .order_by_asc(projects::Column::SortOrder)
            .order_by_desc(projects::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn create(&self, project: &NewProject) -> Result<Project, DomainError> {
        let id = Uuid::new_v4();
        let now = Utc::now().fixed_offset();

        let model = projects::ActiveModel {
            id: Set(id),
            title: Set(project.title.clone()),
            description: Set(project.description.clone()),
            long_description: Set(project.long_description.clone()),
            image: Set(project.image.clone()),
            images: Set(encode_column(&project.images)),
            tags: Set(encode_column(&project.tags)),
            tech_stack: Set(encode_column(&project.tech_stack)),
            languages: Set(encode_column(&project.languages)),
            status: Set(project.status.to_string()),
            difficulty: Set(project.difficulty.to_string()),
            category: Set(project.category.to_string()),
            live_url: Set(project.live_url.clone()),
            github_url: Set(project.github_url.clone()),
            featured: Set(project.featured),
            year: Set(project.year),
            duration: Set(project.duration.clone()),
            team_size: Set(project.team_size),
            role: Set(project.role.clone()),
            challenges: Set(encode_column(&project.challenges)),
            solutions: Set(encode_column(&project.solutions)),
            results: Set(encode_column(&project.results)),
            metrics: Set(encode_column(&project.metrics)),
            published: Set(project.published),
            sort_order: Set(project.sort_order),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn update(
        &self,
        id: &ProjectId,
        update: &ProjectUpdate,
    ) -> Result<Project, DomainError> {
        let existing = projects::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?
            .ok_or_else(|| DomainError::NotFound(format!("Project {}", id)))?;

        let mut model = existing.into_active_model();

        if let Some(title) = &update.title {
            model.title = Set(title.clone());
        }
        if let Some(description) = &update.description {
            model.description = Set(description.clone());
        }
        if let Some(long_description) = &update.long_description {
            model.long_description = Set(long_description.clone());
        }
        if let Some(image) = &update.image {
            model.image = Set(image.clone());
        }
        if let Some(images) = &update.images {
            model.images = Set(encode_column(images));
        }
        if let Some(tags) = &update.tags {
            model.tags = Set(encode_column(tags));
        }
        if let Some(tech_stack) = &update.tech_stack {
            model.tech_stack = Set(encode_column(tech_stack));
        }
        if let Some(languages) = &update.languages {
            model.languages = Set(encode_column(languages));
        }
        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }
        if let Some(difficulty) = update.difficulty {
            model.difficulty = Set(difficulty.to_string());
        }
        if let Some(category) = update.category {
            model.category = Set(category.to_string());
        }
        if let Some(live_url) = &update.live_url {
            model.live_url = Set(live_url.clone());
        }
        if let Some(github_url) = &update.github_url {
            model.github_url = Set(github_url.clone());
        }
        if let Some(featured) = update.featured {
            model.featured = Set(featured);
        }
        if let Some(year) = update.year {
            model.year = Set(year);
        }
        if let Some(duration) = &update.duration {
            model.duration = Set(duration.clone());
        }
        if let Some(team_size) = update.team_size {
            model.team_size = Set(team_size);
        }
        if let Some(role) = &update.role {
            model.role = Set(role.clone());
        }
        if let Some(challenges) = &update.challenges {
            model.challenges = Set(encode_column(challenges));
        }
        if let Some(solutions) = &update.solutions {
            model.solutions = Set(encode_column(solutions));
        }
        if let Some(results) = &update.results {
            model.results = Set(encode_column(results));
        }
        if let Some(metrics) = &update.metrics {
            model.metrics = Set(encode_column(metrics));
        }
        if let Some(published) = update.published {
            model.published = Set(published);
        }
        if let Some(sort_order) = update.sort_order {
            model.sort_order = Set(sort_order);
        }
        model.updated_at = Set(Utc::now().fixed_offset());

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn delete(&self, id: &ProjectId) -> Result<(), DomainError> {
        let result = projects::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            Err(DomainError::NotFound(format!("Project {}", id)))
        } else {
            Ok(())
        }
    }
}

/// Convert SeaORM model to domain entity
impl From<projects::Model> for Project {
    fn from(model: projects::Model) -> Self {
        Project {
            id: ProjectId(model.id),
            title: model.title,
            description: model.description,
            long_description: model.long_description,
            image: model.image,
            images: decode_column(&model.images),
            tags: decode_column(&model.tags),
            tech_stack: decode_column(&model.tech_stack),
            languages: decode_column(&model.languages),
            status: model
                .status
                .parse()
                .ok()
                .unwrap_or(ProjectStatus::Completed),
            difficulty: model
                .difficulty
                .parse()
                .ok()
                .unwrap_or(Difficulty::Intermediate),
            category: model
                .category
                .parse()
                .ok()
                .unwrap_or(ProjectCategory::Fullstack),
            live_url: model.live_url,
            github_url: model.github_url,
            featured: model.featured,
            year: model.year,
            duration: model.duration,
            team_size: model.team_size,
            role: model.role,
            challenges: decode_column(&model.challenges),
            solutions: decode_column(&model.solutions),
            results: decode_column(&model.results),
            metrics: decode_column(&model.metrics),
            published: model.published,
            sort_order: model.sort_order,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}
