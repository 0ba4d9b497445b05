//! Cart line items.

use crate::key::LineKey;
use atelier_commerce::checkout::OrderItemPayload;
use atelier_commerce::ProductId;
use serde::{Deserialize, Serialize};

/// A single product-variant selection in the cart.
///
/// Name, slug, image and prices are a display cache copied at add time.
/// They are never re-fetched, so they can go stale if the catalog entry
/// changes; the backend re-quotes everything at order placement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Product being purchased.
    pub product_id: ProductId,
    /// Product name at add time.
    pub name: String,
    /// Product slug at add time (for linking back to the PDP).
    pub slug: String,
    /// Primary image URL at add time.
    #[serde(default)]
    pub image: Option<String>,
    /// Base unit price at add time.
    pub price: f64,
    /// Discounted unit price, authoritative for totals when present.
    #[serde(default)]
    pub sale_price: Option<f64>,
    /// Quantity, always positive while the line exists.
    pub quantity: u32,
    /// Selected size.
    #[serde(default)]
    pub size: Option<String>,
    /// Selected color name.
    #[serde(default)]
    pub color: Option<String>,
    /// Swatch hex for the selected color (display only, not identity).
    #[serde(default)]
    pub color_hex: Option<String>,
}

impl CartLine {
    /// Create a line with no variant selection.
    pub fn new(
        product_id: impl Into<ProductId>,
        name: impl Into<String>,
        slug: impl Into<String>,
        price: f64,
        quantity: u32,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            name: name.into(),
            slug: slug.into(),
            image: None,
            price,
            sale_price: None,
            quantity,
            size: None,
            color: None,
            color_hex: None,
        }
    }

    /// Select a size.
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Select a color with its display swatch.
    pub fn with_color(mut self, color: impl Into<String>, hex: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self.color_hex = Some(hex.into());
        self
    }

    /// Attach the cached image URL.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Set the sale price.
    pub fn with_sale_price(mut self, sale_price: f64) -> Self {
        self.sale_price = Some(sale_price);
        self
    }

    /// The identity key of this line.
    pub fn key(&self) -> LineKey {
        LineKey {
            product_id: self.product_id.clone(),
            size: self.size.clone(),
            color: self.color.clone(),
        }
    }

    /// Effective unit price: sale price when present, base price otherwise.
    pub fn unit_price(&self) -> f64 {
        self.sale_price.unwrap_or(self.price)
    }

    /// Extended price for the line (unit price times quantity).
    pub fn line_total(&self) -> f64 {
        self.unit_price() * self.quantity as f64
    }

    /// Reduce the line to what the order API needs.
    pub fn to_order_item(&self) -> OrderItemPayload {
        OrderItemPayload {
            product_id: self.product_id.clone(),
            quantity: self.quantity,
            size: self.size.clone(),
            color: self.color.clone(),
        }
    }
}
