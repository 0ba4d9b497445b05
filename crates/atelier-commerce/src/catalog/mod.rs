//! Catalog display models.
//!
//! Products and categories as served by the storefront API.

mod category;
mod product;

pub use category::Category;
pub use product::{Product, ProductColor, ProductStatus};
