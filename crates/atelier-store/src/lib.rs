//! Durable local storage backends for the Atelier cart.
//!
//! Implements the `CartRepository` seam from `atelier-cart` against a
//! JSON file in a local data directory, standing in for the browser's
//! local storage slot. Loads are corrupt-tolerant (anything unreadable
//! degrades to an empty cart) and saves replace the whole document.
//!
//! # Example
//!
//! ```rust,no_run
//! use atelier_cart::CartStore;
//! use atelier_store::FileCartStore;
//!
//! let repository = FileCartStore::in_dir("/var/lib/atelier");
//! let cart = CartStore::new(Box::new(repository));
//! ```

mod file;

pub use file::FileCartStore;

// The in-memory backend ships with atelier-cart; re-exported here so
// callers can pick a backend from one place.
pub use atelier_cart::MemoryCartStore;
