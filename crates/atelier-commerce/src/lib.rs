//! Domain models for the Atelier storefront client.
//!
//! This crate provides the typed shapes the storefront and admin console
//! exchange with the external REST API:
//!
//! - **Catalog**: Products, variant colors/sizes, categories
//! - **Content**: Hero slides, featured collections
//! - **Theme**: Site palette, fonts, announcement banner
//! - **Checkout**: Addresses, payment methods, order submission and tracking
//!
//! All business logic (pricing verification, inventory, order persistence)
//! lives behind the API. These types mirror what it serves; they do not
//! enforce catalog rules themselves.
//!
//! # Example
//!
//! ```rust
//! use atelier_commerce::prelude::*;
//!
//! let product = Product::new("Silk Wrap Dress", "silk-wrap-dress", 189.0);
//! assert_eq!(product.display_price(), 189.0);
//!
//! let slide = HeroSlide::new("New Season", "/images/hero-aw26.jpg");
//! assert!(slide.active);
//! ```

pub mod catalog;
pub mod checkout;
pub mod content;
pub mod ids;
pub mod theme;

pub use ids::*;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::ids::*;

    pub use crate::catalog::{Category, Product, ProductColor, ProductStatus};
    pub use crate::checkout::{
        Order, OrderItemPayload, OrderLine, OrderStatus, PaymentMethod, PlaceOrderPayload,
        ShippingAddress,
    };
    pub use crate::content::{FeaturedCollection, HeroSlide};
    pub use crate::theme::ThemeSettings;
}
