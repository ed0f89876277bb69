//! Contact message handlers
//!
//! Admin endpoints for the contact inbox.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{ContactMessage, MessageId};
use crate::error::AppError;
use crate::AppState;

/// Query parameters for the message list
#[derive(Debug, Deserialize)]
pub struct ListMessagesQuery {
    pub read: Option<bool>,
}

/// Contact message as returned by the API
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub read: bool,
    pub created_at: String,
}

impl From<ContactMessage> for MessageResponse {
    fn from(m: ContactMessage) -> Self {
        Self {
            id: m.id.to_string(),
            name: m.name,
            email: m.email,
            subject: m.subject,
            message: m.message,
            read: m.read,
            created_at: m.created_at.to_rfc3339(),
        }
    }
}

/// Request to update a message's read flag
#[derive(Debug, Deserialize)]
pub struct UpdateMessageRequest {
    pub read: bool,
}

/// GET /api/admin/messages
///
/// List contact messages newest first, optionally filtered on the read flag.
pub async fn list_messages(
    State(state): State<AppState>,
    Query(query): Query<ListMessagesQuery>,
) -> Result<Json<Vec<MessageResponse>>, AppError> {
    let messages = state.contact_service.list_messages(query.read).await?;
    Ok(Json(
        messages.into_iter().map(MessageResponse::from).collect(),
    ))
}

/// PUT /api/admin/messages/:id
///
/// Mark a message as read or unread.
pub async fn update_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateMessageRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let message = state
        .contact_service
        .set_read(&MessageId(id), request.read)
        .await?;
    Ok(Json(message.into()))
}

/// DELETE /api/admin/messages/:id
///
/// Delete a message.
pub async fn delete_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    state.contact_service.delete_message(&MessageId(id)).await?;
    Ok(Json(serde_json::json!({ "success": true })))
}
