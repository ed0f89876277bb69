//! Projects table model.
//!
//! The array-ish columns (images, tags, tech_stack, languages, challenges,
//! solutions, results, metrics) hold JSON-encoded strings; the adapter
//! decodes them into vectors.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub long_description: Option<String>,
    pub image: String,
    #[sea_orm(column_type = "Text")]
    pub images: String,
    #[sea_orm(column_type = "Text")]
    pub tags: String,
    #[sea_orm(column_type = "Text")]
    pub tech_stack: String,
    #[sea_orm(column_type = "Text")]
    pub languages: String,
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
    #[sea_orm(column_type = "Text")]
    pub challenges: String,
    #[sea_orm(column_type = "Text")]
    pub solutions: String,
    #[sea_orm(column_type = "Text")]
    pub results: String,
    #[sea_orm(column_type = "Text")]
    pub metrics: String,
    pub published: bool,
    pub sort_order: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
