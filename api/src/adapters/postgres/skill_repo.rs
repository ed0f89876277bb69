//! PostgreSQL adapter for SkillRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use crate::domain::entities::{NewSkill, Skill, SkillCategory, SkillId, SkillUpdate};
use crate::domain::ports::SkillRepository;
use crate::entity::skills;
use crate::error::DomainError;

/// PostgreSQL implementation of SkillRepository
pub struct PostgresSkillRepository {
    db: DatabaseConnection,
}

impl PostgresSkillRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SkillRepository for PostgresSkillRepository {
    async fn find_by_id(&self, id: &SkillId) -> Result<Option<Skill>, DomainError> {
        let result = skills::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn list(&self, published: Option<bool>) -> Result<Vec<Skill>, DomainError> {
        let mut query = skills::Entity::find();

        if let Some(published) = published {
            query = query.filter(skills::Column::Published.eq(published));
        }

        let results = query
            .order_by_asc(skills::Column::SortOrder)
            .order_by_asc(skills::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn create(&self, skill: &NewSkill) -> Result<Skill, DomainError> {
        let id = Uuid::new_v4();
        let now = Utc::now().fixed_offset();

        let model = skills::ActiveModel {
            id: Set(id),
            name: Set(skill.name.clone()),
            category: Set(skill.category.to_string()),
            level: Set(skill.level),
            years_of_experience: Set(skill.years_of_experience),
            icon: Set(skill.icon.clone()),
            description: Set(skill.description.clone()),
            published: Set(skill.published),
            sort_order: Set(skill.sort_order),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn update(&self, id: &SkillId, update: &SkillUpdate) -> Result<Skill, DomainError> {
        let existing = skills::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?
            .ok_or_else(|| DomainError::NotFound(format!("Skill {}", id)))?;

        let mut model = existing.into_active_model();

        if let Some(name) = &update.name {
            model.name = Set(name.clone());
        }
        if let Some(category) = update.category {
            model.category = Set(category.to_string());
        }
        if let Some(level) = update.level {
            model.level = Set(level);
        }
        if let Some(years) = update.years_of_experience {
            model.years_of_experience = Set(years);
        }
        if let Some(icon) = &update.icon {
            model.icon = Set(icon.clone());
        }
        if let Some(description) = &update.description {
            model.description = Set(description.clone());
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

    async fn delete(&self, id: &SkillId) -> Result<(), DomainError> {
        let result = skills::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            Err(DomainError::NotFound(format!("Skill {}", id)))
        } else {
            Ok(())
        }
    }
}

/// Convert SeaORM model to domain entity
impl From<skills::Model> for Skill {
    fn from(model: skills::Model) -> Self {
        Skill {
            id: SkillId(model.id),
            name: model.name,
            category: model.category.parse().ok().unwrap_or(SkillCategory::Other),
            level: model.level,
            years_of_experience: model.years_of_experience,
            icon: model.icon,
            description: model.description,
            published: model.published,
            sort_order: model.sort_order,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}
