//! PostgreSQL adapter for TestimonialRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use crate::domain::entities::{NewTestimonial, Testimonial, TestimonialId, TestimonialUpdate};
use crate::domain::ports::TestimonialRepository;
use crate::entity::testimonials;
use crate::error::DomainError;

/// PostgreSQL implementation of TestimonialRepository
pub struct PostgresTestimonialRepository {
    db: DatabaseConnection,
}

impl PostgresTestimonialRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TestimonialRepository for PostgresTestimonialRepository {
    async fn find_by_id(&self, id: &TestimonialId) -> Result<Option<Testimonial>, DomainError> {
        let result = testimonials::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn list(&self, published: Option<bool>) -> Result<Vec<Testimonial>, DomainError> {
        let mut query = testimonials::Entity::find();

        if let Some(published) = published {
            query = query.filter(testimonials::Column::Published.eq(published));
        }

        let results = query
            .order_by_asc(testimonials::Column::SortOrder)
            .order_by_desc(testimonials::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn create(&self, testimonial: &NewTestimonial) -> Result<Testimonial, DomainError> {
        let id = Uuid::new_v4();
        let now = Utc::now().fixed_offset();

        let model = testimonials::ActiveModel {
            id: Set(id),
            name: Set(testimonial.name.clone()),
            role: Set(testimonial.role.clone()),
            company: Set(testimonial.company.clone()),
            content: Set(testimonial.content.clone()),
            rating: Set(testimonial.rating),
            image: Set(testimonial.image.clone()),
            project: Set(testimonial.project.clone()),
            verified: Set(testimonial.verified),
            published: Set(testimonial.published),
            sort_order: Set(testimonial.sort_order),
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
        id: &TestimonialId,
        update: &TestimonialUpdate,
    ) -> Result<Testimonial, DomainError> {
        let existing = testimonials::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?
            .ok_or_else(|| DomainError::NotFound(format!("Testimonial {}", id)))?;

        let mut model = existing.into_active_model();

        if let Some(name) = &update.name {
            model.name = Set(name.clone());
        }
        if let Some(role) = &update.role {
            model.role = Set(role.clone());
        }
        if let Some(company) = &update.company {
            model.company = Set(company.clone());
        }
        if let Some(content) = &update.content {
            model.content = Set(content.clone());
        }
        if let Some(rating) = update.rating {
            model.rating = Set(rating);
        }
        if let Some(image) = &update.image {
            model.image = Set(image.clone());
        }
        if let Some(project) = &update.project {
            model.project = Set(project.clone());
        }
        if let Some(verified) = update.verified {
            model.verified = Set(verified);
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

    async fn delete(&self, id: &TestimonialId) -> Result<(), DomainError> {
        let result = testimonials::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            Err(DomainError::NotFound(format!("Testimonial {}", id)))
        } else {
            Ok(())
        }
    }
}

/// Convert SeaORM model to domain entity
impl From<testimonials::Model> for Testimonial {
    fn from(model: testimonials::Model) -> Self {
        Testimonial {
            id: TestimonialId(model.id),
            name: model.name,
            role: model.role,
            company: model.company,
            content: model.content,
            rating: model.rating,
            image: model.image,
            project: model.project,
            verified: model.verified,
            published: model.published,
            sort_order: model.sort_order,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}
