use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Row types for the read-only catalog tables rendered by the website.
/// Shapes mirror the hosted database schema; fields pass through unchanged.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub icon: String,
    pub short_description: String,
    pub full_description: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    pub image_url: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub client: String,
    pub industry: String,
    pub location: Option<String>,
    pub year: Option<i32>,
    pub status: String,
    pub short_description: String,
    pub full_description: Option<String>,
    pub scope: Option<String>,
    pub featured: bool,
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub gallery: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Equipment {
    pub id: String,
    pub name: String,
    pub category: Option<String>,
    pub quantity: i32,
    pub description: Option<String>,
    #[serde(default)]
    pub specifications: Value,
    pub image_url: Option<String>,
    pub is_available: bool,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: String,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub qualifications: Option<String>,
    pub experience: Option<String>,
    pub image_url: Option<String>,
    pub is_director: bool,
    pub display_order: i32,
    pub created_at: String,
}
