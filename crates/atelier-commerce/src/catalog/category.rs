//! Category types for catalog navigation.

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// A product category shown in navigation and collection pages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Category name.
    pub name: String,
    /// URL-friendly slug.
    pub slug: String,
    /// Category description.
    #[serde(default)]
    pub description: Option<String>,
    /// Category banner image URL.
    #[serde(default)]
    pub image: Option<String>,
    /// Sort order position in navigation.
    #[serde(default)]
    pub position: i32,
    /// Unix timestamp of creation.
    #[serde(default)]
    pub created_at: i64,
    /// Unix timestamp of last update.
    #[serde(default)]
    pub updated_at: i64,
}

impl Category {
    /// Create a new category.
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        let now = current_timestamp();
        Self {
            id: CategoryId::generate(),
            name: name.into(),
            slug: slug.into(),
            description: None,
            image: None,
            position: 0,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

/// Sort categories for display (position, then name).
pub fn sort_for_display(categories: &mut [Category]) {
    categories.sort_by(|a, b| a.position.cmp(&b.position).then_with(|| a.name.cmp(&b.name)));
}
