//! Product display models.

use crate::ids::{CategoryId, ProductId};
use serde::{Deserialize, Serialize};

/// Product visibility status in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    /// Product is in draft mode, not visible to shoppers.
    Draft,
    /// Product is active and visible.
    #[default]
    Active,
    /// Product is archived, not visible but data preserved.
    Archived,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Draft => "draft",
            ProductStatus::Active => "active",
            ProductStatus::Archived => "archived",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "draft" => Some(ProductStatus::Draft),
            "active" => Some(ProductStatus::Active),
            "archived" => Some(ProductStatus::Archived),
            _ => None,
        }
    }
}

/// A named variant color with its display swatch.
///
/// The hex value is display-only; the color *name* is what identifies a
/// variant selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductColor {
    /// Color name shown to the shopper (e.g., "Noir").
    pub name: String,
    /// Swatch hex value (e.g., "#1a1a1a").
    pub hex: String,
}

impl ProductColor {
    /// Create a new color swatch.
    pub fn new(name: impl Into<String>, hex: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hex: hex.into(),
        }
    }
}

/// A product as served by the catalog API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// URL-friendly slug (unique).
    pub slug: String,
    /// Full description.
    #[serde(default)]
    pub description: Option<String>,
    /// Image URLs, first is primary.
    #[serde(default)]
    pub images: Vec<String>,
    /// Base unit price.
    pub price: f64,
    /// Discounted unit price, authoritative when present.
    #[serde(default)]
    pub sale_price: Option<f64>,
    /// Available sizes (e.g., "XS".."XL").
    #[serde(default)]
    pub sizes: Vec<String>,
    /// Available colors.
    #[serde(default)]
    pub colors: Vec<ProductColor>,
    /// Category this product belongs to.
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    /// Whether the product appears in featured rails.
    #[serde(default)]
    pub featured: bool,
    /// Product visibility status.
    #[serde(default)]
    pub status: ProductStatus,
    /// Unix timestamp of creation.
    #[serde(default)]
    pub created_at: i64,
    /// Unix timestamp of last update.
    #[serde(default)]
    pub updated_at: i64,
}

impl Product {
    /// Create a new active product.
    pub fn new(name: impl Into<String>, slug: impl Into<String>, price: f64) -> Self {
        let now = current_timestamp();
        Self {
            id: ProductId::generate(),
            name: name.into(),
            slug: slug.into(),
            description: None,
            images: Vec::new(),
            price,
            sale_price: None,
            sizes: Vec::new(),
            colors: Vec::new(),
            category_id: None,
            featured: false,
            status: ProductStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    /// The price a shopper pays per unit: sale price when present.
    pub fn display_price(&self) -> f64 {
        self.sale_price.unwrap_or(self.price)
    }

    /// Check if the product is on sale.
    pub fn is_on_sale(&self) -> bool {
        matches!(self.sale_price, Some(sale) if sale < self.price)
    }

    /// Check if the product requires a size or color selection.
    pub fn has_variants(&self) -> bool {
        !self.sizes.is_empty() || !self.colors.is_empty()
    }

    /// Primary image URL, if any.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Find a color swatch by name.
    pub fn color(&self, name: &str) -> Option<&ProductColor> {
        self.colors.iter().find(|c| c.name == name)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_price_prefers_sale() {
        let mut product = Product::new("Wool Coat", "wool-coat", 420.0);
        assert_eq!(product.display_price(), 420.0);

        product.sale_price = Some(299.0);
        assert_eq!(product.display_price(), 299.0);
        assert!(product.is_on_sale());
    }

    #[test]
    fn test_sale_at_full_price_is_not_on_sale() {
        let mut product = Product::new("Wool Coat", "wool-coat", 420.0);
        product.sale_price = Some(420.0);
        assert!(!product.is_on_sale());
    }

    #[test]
    fn test_has_variants() {
        let mut product = Product::new("Tote", "tote", 95.0);
        assert!(!product.has_variants());

        product.colors.push(ProductColor::new("Tan", "#c8a27a"));
        assert!(product.has_variants());
    }

    #[test]
    fn test_status_round_trip() {
        assert_eq!(ProductStatus::from_str("Archived"), Some(ProductStatus::Archived));
        assert_eq!(ProductStatus::from_str("bogus"), None);
        assert_eq!(ProductStatus::Active.as_str(), "active");
    }

    #[test]
    fn test_product_json_field_names() {
        let mut product = Product::new("Tote", "tote", 95.0);
        product.sale_price = Some(80.0);

        let json = serde_json::to_value(&product).unwrap();
        assert!(json.get("salePrice").is_some());
        assert!(json.get("categoryId").is_some());
    }
}
