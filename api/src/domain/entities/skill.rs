//! Skill domain entity
//!
//! A skill listed on the public site with a self-assessed proficiency level.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Proficiency level bounds. Values outside the range are clamped, not
/// rejected.
pub const MIN_LEVEL: i32 = 1;
pub const MAX_LEVEL: i32 = 100;

/// Unique identifier for a skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SkillId(pub Uuid);

impl SkillId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SkillId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for SkillId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for SkillId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Grouping bucket for skills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    Tools,
    Cloud,
    Mobile,
    Other,
}

impl std::fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkillCategory::Frontend => write!(f, "frontend"),
            SkillCategory::Backend => write!(f, "backend"),
            SkillCategory::Database => write!(f, "database"),
            SkillCategory::Tools => write!(f, "tools"),
            SkillCategory::Cloud => write!(f, "cloud"),
            SkillCategory::Mobile => write!(f, "mobile"),
            SkillCategory::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for SkillCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "frontend" => Ok(SkillCategory::Frontend),
            "backend" => Ok(SkillCategory::Backend),
            "database" => Ok(SkillCategory::Database),
            "tools" => Ok(SkillCategory::Tools),
            "cloud" => Ok(SkillCategory::Cloud),
            "mobile" => Ok(SkillCategory::Mobile),
            "other" => Ok(SkillCategory::Other),
            _ => Err(format!("Unknown skill category: {}", s)),
        }
    }
}

/// A skill entry
#[derive(Debug, Clone, Serialize)]
pub struct Skill {
    pub id: SkillId,
    pub name: String,
    pub category: SkillCategory,
    /// Proficiency 1-100
    pub level: i32,
    pub years_of_experience: i32,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub published: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Clamp a proficiency level into the 1-100 range
pub fn clamp_level(level: i32) -> i32 {
    level.clamp(MIN_LEVEL, MAX_LEVEL)
}

/// Data needed to create a new skill
#[derive(Debug, Clone)]
pub struct NewSkill {
    pub name: String,
    pub category: SkillCategory,
    pub level: i32,
    pub years_of_experience: i32,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub published: bool,
    pub sort_order: i32,
}

/// Field-wise update for a skill; `None` leaves the stored value alone.
#[derive(Debug, Clone, Default)]
pub struct SkillUpdate {
    pub name: Option<String>,
    pub category: Option<SkillCategory>,
    pub level: Option<i32>,
    pub years_of_experience: Option<i32>,
    pub icon: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub published: Option<bool>,
    pub sort_order: Option<i32>,
}

impl SkillUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.level.is_none()
            && self.years_of_experience.is_none()
            && self.icon.is_none()
            && self.description.is_none()
            && self.published.is_none()
            && self.sort_order.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_level_bounds() {
        assert_eq!(clamp_level(0), 1);
        assert_eq!(clamp_level(-5), 1);
        assert_eq!(clamp_level(50), 50);
        assert_eq!(clamp_level(100), 100);
        assert_eq!(clamp_level(150), 100);
    }

    #[test]
    fn skill_category_display() {
        assert_eq!(SkillCategory::Frontend.to_string(), "frontend");
        assert_eq!(SkillCategory::Backend.to_string(), "backend");
        assert_eq!(SkillCategory::Database.to_string(), "database");
        assert_eq!(SkillCategory::Tools.to_string(), "tools");
        assert_eq!(SkillCategory::Cloud.to_string(), "cloud");
        assert_eq!(SkillCategory::Mobile.to_string(), "mobile");
        assert_eq!(SkillCategory::Other.to_string(), "other");
    }

    #[test]
    fn skill_category_from_str() {
        assert_eq!(
            "frontend".parse::<SkillCategory>().unwrap(),
            SkillCategory::Frontend
        );
        assert_eq!(
            "CLOUD".parse::<SkillCategory>().unwrap(),
            SkillCategory::Cloud
        );
        assert!("invalid".parse::<SkillCategory>().is_err());
    }

    #[test]
    fn skill_update_is_empty() {
        assert!(SkillUpdate::default().is_empty());
        let update = SkillUpdate {
            level: Some(80),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }

    #[test]
    fn skill_id_display() {
        let id = SkillId(Uuid::nil());
        assert_eq!(id.to_string(), "00000000-0000-0000-0000-000000000000");
    }
}
