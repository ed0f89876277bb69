//! PostgreSQL adapter for MessageRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use crate::domain::entities::{ContactMessage, MessageId, NewMessage};
use crate::domain::ports::MessageRepository;
use crate::entity::contact_messages;
use crate::error::DomainError;

/// PostgreSQL implementation of MessageRepository
pub struct PostgresMessageRepository {
    db: DatabaseConnection,
}

impl PostgresMessageRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MessageRepository for PostgresMessageRepository {
    async fn find_by_id(&self, id: &MessageId) -> Result<Option<ContactMessage>, DomainError> {
        let result = contact_messages::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn list(&self, read: Option<bool>) -> Result<Vec<ContactMessage>, DomainError> {
        let mut query = contact_messages::Entity::find();

        if let Some(read) = read {
            query = query.filter(contact_messages::Column::Read.eq(read));
        }

        let results = query
            .order_by_desc(contact_messages::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn create(&self, message: &NewMessage) -> Result<ContactMessage, DomainError> {
        let id = Uuid::new_v4();
        let now = Utc::now().fixed_offset();

        let model = contact_messages::ActiveModel {
            id: Set(id),
            name: Set(message.name.clone()),
            email: Set(message.email.clone()),
            subject: Set(message.subject.clone()),
            message: Set(message.message.clone()),
            read: Set(false),
            created_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn set_read(&self, id: &MessageId, read: bool) -> Result<ContactMessage, DomainError> {
        let existing = contact_messages::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?
            .ok_or_else(|| DomainError::NotFound(format!("Message {}", id)))?;

        let mut model = existing.into_active_model();
        model.read = Set(read);

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn delete(&self, id: &MessageId) -> Result<(), DomainError> {
        let result = contact_messages::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            Err(DomainError::NotFound(format!("Message {}", id)))
        } else {
            Ok(())
        }
    }
}

/// Convert SeaORM model to domain entity
impl From<contact_messages::Model> for ContactMessage {
    fn from(model: contact_messages::Model) -> Self {
        ContactMessage {
            id: MessageId(model.id),
            name: model.name,
            email: model.email,
            subject: model.subject,
            message: model.message,
            read: model.read,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}
