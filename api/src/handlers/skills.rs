//! Skill handlers
//!
//! Public skill list plus the admin CRUD endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{NewSkill, Skill, SkillCategory, SkillId, SkillUpdate};
use crate::error::AppError;
use crate::AppState;

use super::double_option;

/// Query parameters for the admin skill list
#[derive(Debug, Deserialize)]
pub struct ListSkillsQuery {
    pub published: Option<bool>,
}

/// Skill as returned by the API
#[derive(Debug, Serialize)]
pub struct SkillResponse {
    pub id: String,
    pub name: String,
    pub category: String,
    pub level: i32,
    pub years_of_experience: i32,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub published: bool,
    pub sort_order: i32,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Skill> for SkillResponse {
    fn from(s: Skill) -> Self {
        Self {
            id: s.id.to_string(),
            name: s.name,
            category: s.category.to_string(),
            level: s.level,
            years_of_experience: s.years_of_experience,
            icon: s.icon,
            description: s.description,
            published: s.published,
            sort_order: s.sort_order,
            created_at: s.created_at.to_rfc3339(),
            updated_at: s.updated_at.to_rfc3339(),
        }
    }
}

/// Request to create a skill
#[derive(Debug, Deserialize)]
pub struct CreateSkillRequest {
    pub name: String,
    #[serde(default = "default_category")]
    pub category: SkillCategory,
    #[serde(default = "default_level")]
    pub level: i32,
    #[serde(default)]
    pub years_of_experience: i32,
    pub icon: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub sort_order: i32,
}

fn default_category() -> SkillCategory {
    SkillCategory::Other
}

fn default_level() -> i32 {
    1
}

impl From<CreateSkillRequest> for NewSkill {
    fn from(r: CreateSkillRequest) -> Self {
        Self {
            name: r.name,
            category: r.category,
            level: r.level,
            years_of_experience: r.years_of_experience,
            icon: r.icon,
            description: r.description,
            published: r.published,
            sort_order: r.sort_order,
        }
    }
}

/// Request to update a skill. Absent fields keep their stored value.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateSkillRequest {
    pub name: Option<String>,
    pub category: Option<SkillCategory>,
    pub level: Option<i32>,
    pub years_of_experience: Option<i32>,
    #[serde(deserialize_with = "double_option")]
    pub icon: Option<Option<String>>,
    #[serde(deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    pub published: Option<bool>,
    pub sort_order: Option<i32>,
}

impl From<UpdateSkillRequest> for SkillUpdate {
    fn from(r: UpdateSkillRequest) -> Self {
        Self {
            name: r.name,
            category: r.category,
            level: r.level,
            years_of_experience: r.years_of_experience,
            icon: r.icon,
            description: r.description,
            published: r.published,
            sort_order: r.sort_order,
        }
    }
}

/// GET /api/skills
///
/// List published skills for the public site.
pub async fn list_public_skills(
    State(state): State<AppState>,
) -> Result<Json<Vec<SkillResponse>>, AppError> {
    let skills = state.portfolio_service.list_public_skills().await?;
    Ok(Json(skills.into_iter().map(SkillResponse::from).collect()))
}

/// GET /api/admin/skills
///
/// List all skills, optionally filtered on the published flag.
pub async fn list_skills(
    State(state): State<AppState>,
    Query(query): Query<ListSkillsQuery>,
) -> Result<Json<Vec<SkillResponse>>, AppError> {
    let skills = state.portfolio_service.list_skills(query.published).await?;
    Ok(Json(skills.into_iter().map(SkillResponse::from).collect()))
}

/// POST /api/admin/skills
///
/// Create a new skill. The level is clamped to the 1-100 range.
pub async fn create_skill(
    State(state): State<AppState>,
    Json(request): Json<CreateSkillRequest>,
) -> Result<Json<SkillResponse>, AppError> {
    let skill = state.portfolio_service.create_skill(request.into()).await?;
    Ok(Json(skill.into()))
}

/// GET /api/admin/skills/:id
///
/// Get one skill, published or not.
pub async fn get_skill(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SkillResponse>, AppError> {
    let skill = state.portfolio_service.get_skill(&SkillId(id)).await?;
    Ok(Json(skill.into()))
}

/// PUT /api/admin/skills/:id
///
/// Apply a field-wise update.
pub async fn update_skill(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateSkillRequest>,
) -> Result<Json<SkillResponse>, AppError> {
    let skill = state
        .portfolio_service
        .update_skill(&SkillId(id), request.into())
        .await?;
    Ok(Json(skill.into()))
}

/// DELETE /api/admin/skills/:id
///
/// Delete a skill.
pub async fn delete_skill(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    state.portfolio_service.delete_skill(&SkillId(id)).await?;
    Ok(Json(serde_json::json!({ "success": true })))
}
