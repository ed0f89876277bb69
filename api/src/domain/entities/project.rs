//! Project domain entity
//!
//! Represents a portfolio project shown on the public site and managed
//! through the admin API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectId(pub Uuid);

impl ProjectId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ProjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for ProjectId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle status of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    /// Shipped and done
    Completed,
    /// Actively being built
    InProgress,
    /// Shipped, still receiving updates
    Maintained,
    /// No longer maintained
    Archived,
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectStatus::Completed => write!(f, "completed"),
            ProjectStatus::InProgress => write!(f, "in-progress"),
            ProjectStatus::Maintained => write!(f, "maintained"),
            ProjectStatus::Archived => write!(f, "archived"),
        }
    }
}

impl std::str::FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "completed" => Ok(ProjectStatus::Completed),
            "in-progress" => Ok(ProjectStatus::InProgress),
            "maintained" => Ok(ProjectStatus::Maintained),
            "archived" => Ok(ProjectStatus::Archived),
            _ => Err(format!("Unknown project status: {}", s)),
        }
    }
}

/// How demanding the project was to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Beginner => write!(f, "beginner"),
            Difficulty::Intermediate => write!(f, "intermediate"),
            Difficulty::Advanced => write!(f, "advanced"),
            Difficulty::Expert => write!(f, "expert"),
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            "expert" => Ok(Difficulty::Expert),
            _ => Err(format!("Unknown difficulty: {}", s)),
        }
    }
}

/// Which part of the stack the project belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectCategory {
    Frontend,
    Backend,
    Fullstack,
    Mobile,
    AiMl,
    Devops,
}

impl std::fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectCategory::Frontend => write!(f, "frontend"),
            ProjectCategory::Backend => write!(f, "backend"),
            ProjectCategory::Fullstack => write!(f, "fullstack"),
            ProjectCategory::Mobile => write!(f, "mobile"),
            ProjectCategory::AiMl => write!(f, "ai-ml"),
            ProjectCategory::Devops => write!(f, "devops"),
        }
    }
}

impl std::str::FromStr for ProjectCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "frontend" => Ok(ProjectCategory::Frontend),
            "backend" => Ok(ProjectCategory::Backend),
            "fullstack" => Ok(ProjectCategory::Fullstack),
            "mobile" => Ok(ProjectCategory::Mobile),
            "ai-ml" => Ok(ProjectCategory::AiMl),
            "devops" => Ok(ProjectCategory::Devops),
            _ => Err(format!("Unknown project category: {}", s)),
        }
    }
}

/// A headline figure attached to a project ("Users" / "10k+")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMetric {
    pub label: String,
    pub value: String,
}

/// A portfolio project
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub long_description: Option<String>,
    pub image: String,
    pub images: Vec<String>,
    pub tags: Vec<String>,
    pub tech_stack: Vec<String>,
    pub languages: Vec<String>,
    pub status: ProjectStatus,
    pub difficulty: Difficulty,
    pub category: ProjectCategory,
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Check if the project is visible on the public site
    pub fn is_public(&self) -> bool {
        self.published
    }
}

/// Data needed to create a new project
#[derive(Debug, Clone)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub long_description: Option<String>,
    pub image: String,
    pub images: Vec<String>,
    pub tags: Vec<String>,
    pub tech_stack: Vec<String>,
    pub languages: Vec<String>,
    pub status: ProjectStatus,
    pub difficulty: Difficulty,
    pub category: ProjectCategory,
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
}

/// Field-wise update for a project. `None` leaves the stored value alone,
/// so a body carrying only `{"published": false}` cannot clobber the
/// array columns.
#[derive(Debug, Clone, Default)]
pub struct ProjectUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub long_description: Option<Option<String>>,
    pub image: Option<String>,
    pub images: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub tech_stack: Option<Vec<String>>,
    pub languages: Option<Vec<String>>,
    pub status: Option<ProjectStatus>,
    pub difficulty: Option<Difficulty>,
    pub category: Option<ProjectCategory>,
    pub live_url: Option<Option<String>>,
    pub github_url: Option<Option<String>>,
    pub featured: Option<bool>,
    pub year: Option<i32>,
    pub duration: Option<Option<String>>,
    pub team_size: Option<Option<i32>>,
    pub role: Option<Option<String>>,
    pub challenges: Option<Vec<String>>,
    pub solutions: Option<Vec<String>>,
    pub results: Option<Vec<String>>,
    pub metrics: Option<Vec<ProjectMetric>>,
    pub published: Option<bool>,
    pub sort_order: Option<i32>,
}

impl ProjectUpdate {
    /// True when no field is set, i.e. the update would be a no-op write.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.long_description.is_none()
            && self.image.is_none()
            && self.images.is_none()
            && self.tags.is_none()
            && self.tech_stack.is_none()
            && self.languages.is_none()
            && self.status.is_none()
            && self.difficulty.is_none()
            && self.category.is_none()
            && self.live_url.is_none()
            && self.github_url.is_none()
            && self.featured.is_none()
            && self.year.is_none()
            && self.duration.is_none()
            && self.team_size.is_none()
            && self.role.is_none()
            && self.challenges.is_none()
            && self.solutions.is_none()
            && self.results.is_none()
            && self.metrics.is_none()
            && self.published.is_none()
            && self.sort_order.is_none()
    }
}
