//! Client-side shopping cart store for the Atelier storefront.
//!
//! The cart is the one piece of state this client owns outright: an ordered
//! list of product-variant selections with quantities, persisted locally so
//! it survives a reload. Everything else (pricing verification, stock,
//! order persistence) belongs to the backend.
//!
//! Line identity is the `(product, size, color)` triple: adding the same
//! variant twice merges quantities into one line, while the same product in
//! a different size or color stays a separate line.
//!
//! # Example
//!
//! ```rust
//! use atelier_cart::{CartLine, CartStore, MemoryCartStore};
//!
//! let mut cart = CartStore::new(Box::new(MemoryCartStore::new()));
//!
//! cart.add_item(CartLine::new("prod-1", "Silk Wrap Dress", "silk-wrap-dress", 189.0, 1)
//!     .with_size("M"));
//! cart.add_item(CartLine::new("prod-1", "Silk Wrap Dress", "silk-wrap-dress", 189.0, 2)
//!     .with_size("M"));
//!
//! assert_eq!(cart.item_count(), 3);       // merged into one line
//! assert_eq!(cart.subtotal(), 567.0);
//! assert!(cart.is_open());                // adding opens the cart drawer
//! ```

mod key;
mod line;
mod repository;
mod store;

pub use key::LineKey;
pub use line::CartLine;
pub use repository::{CartDocument, CartRepository, CartStorageError, CART_STORAGE_KEY};
pub use store::CartStore;

// Default in-memory backend, re-exported here so the store is usable
// without the storage crate.
pub use repository::MemoryCartStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        CartDocument, CartLine, CartRepository, CartStorageError, CartStore, LineKey,
        MemoryCartStore,
    };
}
