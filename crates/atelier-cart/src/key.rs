//! Cart line identity.

use atelier_commerce::ProductId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The identity of a cart line: product plus chosen variant.
///
/// Two lines are the *same* line exactly when product, size and color all
/// match. Absent size/color is `None`, which compares equal only to `None`:
/// a line with no size can never collide with a line whose size string
/// happens to spell some sentinel value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineKey {
    /// Product being purchased.
    pub product_id: ProductId,
    /// Selected size, when the product has sizes.
    pub size: Option<String>,
    /// Selected color name, when the product has colors.
    pub color: Option<String>,
}

impl LineKey {
    /// Create a key from its parts.
    pub fn new(
        product_id: impl Into<ProductId>,
        size: Option<&str>,
        color: Option<&str>,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            size: size.map(String::from),
            color: color.map(String::from),
        }
    }
}

impl fmt::Display for LineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.product_id,
            self.size.as_deref().unwrap_or("-"),
            self.color.as_deref().unwrap_or("-"),
        )
    }
}
