//! Project handlers
//!
//! Public project reads plus the admin CRUD endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{
    Difficulty, NewProject, Project, ProjectCategory, ProjectId, ProjectMetric, ProjectStatus,
    ProjectUpdate,
};
use crate::error::AppError;
use crate::AppState;

use super::double_option;

/// Query parameters for the admin project list
#[derive(Debug, Deserialize)]
pub struct ListProjectsQuery {
    pub published: Option<bool>,
}

/// Project as returned by the API
#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub long_description: Option<String>,
    pub image: String,
    pub images: Vec<String>,
    pub tags: Vec<String>,
    pub tech_stack: Vec<String>,
    pub languages: Vec<String>,
    pub status: String,
    pub difficulty: String,
    pub category: String,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    pub featured: bool,
    pub year: i32,
    pub duration: Option<String>,
    pub team_size: Option<i32>,
    pub role: Option<String>,
    pub challenges: Vec<String>,
    pub solutions: Vec<String>,
    pub results: Vec<String>,
    pub metrics: Vec<ProjectMetric>,
    pub published: bool,
    pub sort_order: i32,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Project> for ProjectResponse {
    fn from(p: Project) -> Self {
        Self {
            id: p.id.to_string(),
            title: p.title,
            description: p.description,
            long_description: p.long_description,
            image: p.image,
            images: p.images,
            tags: p.tags,
            tech_stack: p.tech_stack,
            languages: p.languages,
            status: p.status.to_string(),
            difficulty: p.difficulty.to_string(),
            category: p.category.to_string(),
            live_url: p.live_url,
            github_url: p.github_url,
            featured: p.featured,
            year: p.year,
            duration: p.duration,
            team_size: p.team_size,
            role: p.role,
            challenges: p.challenges,
            solutions: p.solutions,
            results: p.results,
            metrics: p.metrics,
            published: p.published,
            sort_order: p.sort_order,
            created_at: p.created_at.to_rfc3339(),
            updated_at: p.updated_at.to_rfc3339(),
        }
    }
}

/// Request to create a project
#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub long_description: Option<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default = "default_status")]
    pub status: ProjectStatus,
    #[serde(default = "default_difficulty")]
    pub difficulty: Difficulty,
    #[serde(default = "default_category")]
    pub category: ProjectCategory,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default = "default_year")]
    pub year: i32,
    pub duration: Option<String>,
    pub team_size: Option<i32>,
    pub role: Option<String>,
    #[serde(default)]
    pub challenges: Vec<String>,
    #[serde(default)]
    pub solutions: Vec<String>,
    #[serde(default)]
    pub results: Vec<String>,
    #[serde(default)]
    pub metrics: Vec<ProjectMetric>,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub sort_order: i32,
}

fn default_status() -> ProjectStatus {
    ProjectStatus::Completed
}

fn default_difficulty() -> Difficulty {
    Difficulty::Intermediate
}

fn default_category() -> ProjectCategory {
    ProjectCategory::Fullstack
}

fn default_year() -> i32 {
    Utc::now().year()
}

impl From<CreateProjectRequest> for NewProject {
    fn from(r: CreateProjectRequest) -> Self {
        Self {
            title: r.title,
            description: r.description,
            long_description: r.long_description,
            image: r.image,
            images: r.images,
            tags: r.tags,
            tech_stack: r.tech_stack,
            languages: r.languages,
            status: r.status,
            difficulty: r.difficulty,
            category: r.category,
            live_url: r.live_url,
            github_url: r.github_url,
            featured: r.featured,
            year: r.year,
            duration: r.duration,
            team_size: r.team_size,
            role: r.role,
            challenges: r.challenges,
            solutions: r.solutions,
            results: r.results,
            metrics: r.metrics,
            published: r.published,
            sort_order: r.sort_order,
        }
    }
}

/// Request to update a project. Absent fields keep their stored value;
/// an explicit `null` clears a nullable one.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateProjectRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(deserialize_with = "double_option")]
    pub long_description: Option<Option<String>>,
    pub image: Option<String>,
    pub images: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub tech_stack: Option<Vec<String>>,
    pub languages: Option<Vec<String>>,
    pub status: Option<ProjectStatus>,
    pub difficulty: Option<Difficulty>,
    pub category: Option<ProjectCategory>,
    #[serde(deserialize_with = "double_option")]
    pub live_url: Option<Option<String>>,
    #[serde(deserialize_with = "double_option")]
    pub github_url: Option<Option<String>>,
    pub featured: Option<bool>,
    pub year: Option<i32>,
    #[serde(deserialize_with = "double_option")]
    pub duration: Option<Option<String>>,
    #[serde(deserialize_with = "double_option")]
    pub team_size: Option<Option<i32>>,
    #[serde(deserialize_with = "double_option")]
    pub role: Option<Option<String>>,
    pub challenges: Option<Vec<String>>,
    pub solutions: Option<Vec<String>>,
    pub results: Option<Vec<String>>,
    pub metrics: Option<Vec<ProjectMetric>>,
    pub published: Option<bool>,
    pub sort_order: Option<i32>,
}

impl From<UpdateProjectRequest> for ProjectUpdate {
    fn from(r: UpdateProjectRequest) -> Self {
        Self {
            title: r.title,
            description: r.description,
            long_description: r.long_description,
            image: r.image,
            images: r.images,
            tags: r.tags,
            tech_stack: r.tech_stack,
            languages: r.languages,
            status: r.status,
            difficulty: r.difficulty,
            category: r.category,
            live_url: r.live_url,
            github_url: r.github_url,
            featured: r.featured,
            year: r.year,
            duration: r.duration,
            team_size: r.team_size,
            role: r.role,
            challenges: r.challenges,
            solutions: r.solutions,
            results: r.results,
            metrics: r.metrics,
            published: r.published,
            sort_order: r.sort_order,
        }
    }
}

/// GET /api/projects
///
/// List published projects for the public site.
pub async fn list_public_projects(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProjectResponse>>, AppError> {
    let projects = state.portfolio_service.list_public_projects().await?;
    Ok(Json(
        projects.into_iter().map(ProjectResponse::from).collect(),
    ))
}

/// GET /api/projects/:id
///
/// Get one published project. Drafts and unknown ids both return 404.
pub async fn get_public_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProjectResponse>, AppError> {
    let project = state
        .portfolio_service
        .get_public_project(&ProjectId(id))
        .await?;
    Ok(Json(project.into()))
}

/// GET /api/admin/projects
///
/// List all projects, optionally filtered on the published flag.
pub async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<ListProjectsQuery>,
) -> Result<Json<Vec<ProjectResponse>>, AppError> {
    let projects = state.portfolio_service.list_projects(query.published).await?;
    Ok(Json(
        projects.into_iter().map(ProjectResponse::from).collect(),
    ))
}

/// POST /api/admin/projects
///
/// Create a new project.
pub async fn create_project(
    State(state): State<AppState>,
    Json(request): Json<CreateProjectRequest>,
) -> Result<Json<ProjectResponse>, AppError> {
    let project = state.portfolio_service.create_project(request.into()).await?;
    Ok(Json(project.into()))
}

/// GET /api/admin/projects/:id
///
/// Get one project, published or not.
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProjectResponse>, AppError> {
    let project = state.portfolio_service.get_project(&ProjectId(id)).await?;
    Ok(Json(project.into()))
}

/// PUT /api/admin/projects/:id
///
/// Apply a field-wise update. Only fields present in the body change, so
/// toggling `{"published": false}` leaves the array columns alone.
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateProjectRequest>,
) -> Result<Json<ProjectResponse>, AppError> {
    let project = state
        .portfolio_service
        .update_project(&ProjectId(id), request.into())
        .await?;
    Ok(Json(project.into()))
}

/// DELETE /api/admin/projects/:id
///
/// Delete a project.
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    state.portfolio_service.delete_project(&ProjectId(id)).await?;
    Ok(Json(serde_json::json!({ "success": true })))
}
