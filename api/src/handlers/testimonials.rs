//! Testimonial handlers
//!
//! Public testimonial list plus the admin CRUD endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{NewTestimonial, Testimonial, TestimonialId, TestimonialUpdate};
use crate::error::AppError;
use crate::AppState;

use super::double_option;

/// Query parameters for the admin testimonial list
#[derive(Debug, Deserialize)]
pub struct ListTestimonialsQuery {
    pub published: Option<bool>,
}

/// Testimonial as returned by the API
#[derive(Debug, Serialize)]
pub struct TestimonialResponse {
    pub id: String,
    pub name: String,
    pub role: String,
    pub company: String,
    pub content: String,
    pub rating: i32,
    pub image: Option<String>,
    pub project: Option<String>,
    pub verified: bool,
    pub published: bool,
    pub sort_order: i32,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Testimonial> for TestimonialResponse {
    fn from(t: Testimonial) -> Self {
        Self {
            id: t.id.to_string(),
            name: t.name,
            role: t.role,
            company: t.company,
            content: t.content,
            rating: t.rating,
            image: t.image,
            project: t.project,
            verified: t.verified,
            published: t.published,
            sort_order: t.sort_order,
            created_at: t.created_at.to_rfc3339(),
            updated_at: t.updated_at.to_rfc3339(),
        }
    }
}

/// Request to create a testimonial
#[derive(Debug, Deserialize)]
pub struct CreateTestimonialRequest {
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub company: String,
    pub content: String,
    #[serde(default = "default_rating")]
    pub rating: i32,
    pub image: Option<String>,
    pub project: Option<String>,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub sort_order: i32,
}

fn default_rating() -> i32 {
    5
}

impl From<CreateTestimonialRequest> for NewTestimonial {
    fn from(r: CreateTestimonialRequest) -> Self {
        Self {
            name: r.name,
            role: r.role,
            company: r.company,
            content: r.content,
            rating: r.rating,
            image: r.image,
            project: r.project,
            verified: r.verified,
            published: r.published,
            sort_order: r.sort_order,
        }
    }
}

/// Request to update a testimonial. Absent fields keep their stored value.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateTestimonialRequest {
    pub name: Option<String>,
    pub role: Option<String>,
    pub company: Option<String>,
    pub content: Option<String>,
    pub rating: Option<i32>,
    #[serde(deserialize_with = "double_option")]
    pub image: Option<Option<String>>,
    #[serde(deserialize_with = "double_option")]
    pub project: Option<Option<String>>,
    pub verified: Option<bool>,
    pub published: Option<bool>,
    pub sort_order: Option<i32>,
}

impl From<UpdateTestimonialRequest> for TestimonialUpdate {
    fn from(r: UpdateTestimonialRequest) -> Self {
        Self {
            name: r.name,
            role: r.role,
            company: r.company,
            content: r.content,
            rating: r.rating,
            image: r.image,
            project: r.project,
            verified: r.verified,
            published: r.published,
            sort_order: r.sort_order,
        }
    }
}

/// GET /api/testimonials
///
/// List published testimonials for the public site.
pub async fn list_public_testimonials(
    State(state): State<AppState>,
) -> Result<Json<Vec<TestimonialResponse>>, AppError> {
    let testimonials = state.portfolio_service.list_public_testimonials().await?;
    Ok(Json(
        testimonials
            .into_iter()
            .map(TestimonialResponse::from)
            .collect(),
    ))
}

/// GET /api/admin/testimonials
///
/// List all testimonials, optionally filtered on the published flag.
pub async fn list_testimonials(
    State(state): State<AppState>,
    Query(query): Query<ListTestimonialsQuery>,
) -> Result<Json<Vec<TestimonialResponse>>, AppError> {
    let testimonials = state
        .portfolio_service
        .list_testimonials(query.published)
        .await?;
    Ok(Json(
        testimonials
            .into_iter()
            .map(TestimonialResponse::from)
            .collect(),
    ))
}

/// POST /api/admin/testimonials
///
/// Create a new testimonial. The rating is clamped to the 1-5 range.
pub async fn create_testimonial(
    State(state): State<AppState>,
    Json(request): Json<CreateTestimonialRequest>,
) -> Result<Json<TestimonialResponse>, AppError> {
    let testimonial = state
        .portfolio_service
        .create_testimonial(request.into())
        .await?;
    Ok(Json(testimonial.into()))
}

/// GET /api/admin/testimonials/:id
///
/// Get one testimonial, published or not.
pub async fn get_testimonial(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TestimonialResponse>, AppError> {
    let testimonial = state
        .portfolio_service
        .get_testimonial(&TestimonialId(id))
        .await?;
    Ok(Json(testimonial.into()))
}

/// PUT /api/admin/testimonials/:id
///
/// Apply a field-wise update.
pub async fn update_testimonial(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateTestimonialRequest>,
) -> Result<Json<TestimonialResponse>, AppError> {
    let testimonial = state
        .portfolio_service
        .update_testimonial(&TestimonialId(id), request.into())
        .await?;
    Ok(Json(testimonial.into()))
}

/// DELETE /api/admin/testimonials/:id
///
/// Delete a testimonial.
pub async fn delete_testimonial(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    state
        .portfolio_service
        .delete_testimonial(&TestimonialId(id))
        .await?;
    Ok(Json(serde_json::json!({ "success": true })))
}
