//! Contact form handler
//!
//! Public endpoint that takes contact form submissions.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::domain::entities::NewMessage;
use crate::error::AppError;
use crate::AppState;

/// Request body for the contact form.
///
/// Every field defaults to empty so validation can answer with a 400
/// instead of a body-parse rejection.
#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

/// POST /api/contact
///
/// Validate and persist a contact form submission. Notification delivery
/// happens in the background and never affects the response.
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(request): Json<ContactRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    state
        .contact_service
        .submit(NewMessage {
            name: request.name,
            email: request.email,
            subject: request.subject,
            message: request.message,
        })
        .await?;

    Ok(Json(serde_json::json!({ "success": true })))
}
