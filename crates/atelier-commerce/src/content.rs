//! Site content models: hero slides and featured collections.
//!
//! Both are managed from the admin console and rendered on the landing
//! page. Visibility is controlled by the `active` flag; ordering by
//! `position`.

use crate::ids::{CollectionId, ProductId, SlideId};
use serde::{Deserialize, Serialize};

/// A slide in the landing page hero carousel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HeroSlide {
    /// Unique slide identifier.
    pub id: SlideId,
    /// Main headline text.
    pub headline: String,
    /// Secondary line under the headline.
    #[serde(default)]
    pub subheading: Option<String>,
    /// Background image URL.
    pub image: String,
    /// Call-to-action button label.
    #[serde(default)]
    pub cta_label: Option<String>,
    /// Call-to-action target path.
    #[serde(default)]
    pub cta_href: Option<String>,
    /// Sort order within the carousel.
    #[serde(default)]
    pub position: i32,
    /// Whether the slide is currently shown.
    #[serde(default = "default_active")]
    pub active: bool,
}

impl HeroSlide {
    /// Create a new active slide.
    pub fn new(headline: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id: SlideId::generate(),
            headline: headline.into(),
            subheading: None,
            image: image.into(),
            cta_label: None,
            cta_href: None,
            position: 0,
            active: true,
        }
    }

    /// Attach a call-to-action button.
    pub fn with_cta(mut self, label: impl Into<String>, href: impl Into<String>) -> Self {
        self.cta_label = Some(label.into());
        self.cta_href = Some(href.into());
        self
    }

    /// A slide is renderable only with both CTA fields or neither.
    pub fn has_cta(&self) -> bool {
        self.cta_label.is_some() && self.cta_href.is_some()
    }
}

/// A curated product collection featured on the landing page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedCollection {
    /// Unique collection identifier.
    pub id: CollectionId,
    /// Collection title.
    pub title: String,
    /// URL-friendly slug.
    pub slug: String,
    /// Cover image URL.
    #[serde(default)]
    pub image: Option<String>,
    /// Products in the collection, in display order.
    #[serde(default)]
    pub product_ids: Vec<ProductId>,
    /// Sort order among featured collections.
    #[serde(default)]
    pub position: i32,
    /// Whether the collection is currently shown.
    #[serde(default = "default_active")]
    pub active: bool,
    /// Unix timestamp of last update.
    #[serde(default)]
    pub updated_at: i64,
}

impl FeaturedCollection {
    /// Create a new active collection.
    pub fn new(title: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: CollectionId::generate(),
            title: title.into(),
            slug: slug.into(),
            image: None,
            product_ids: Vec::new(),
            position: 0,
            active: true,
            updated_at: current_timestamp(),
        }
    }

    /// Check whether a product is part of the collection.
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.product_ids.contains(product_id)
    }

    /// Number of products in the collection.
    pub fn len(&self) -> usize {
        self.product_ids.len()
    }

    /// Check if the collection has no products.
    pub fn is_empty(&self) -> bool {
        self.product_ids.is_empty()
    }
}

fn default_active() -> bool {
    true
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

/// Filter and order content for display: active entries sorted by position.
pub fn visible_slides(slides: &[HeroSlide]) -> Vec<&HeroSlide> {
    let mut visible: Vec<&HeroSlide> = slides.iter().filter(|s| s.active).collect();
    visible.sort_by_key(|s| s.position);
    visible
}
