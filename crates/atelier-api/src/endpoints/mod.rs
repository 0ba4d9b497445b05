//! Typed endpoint groups.
//!
//! Storefront reads are unauthenticated; admin writes require the client
//! to carry a bearer token. The backend enforces authorization either way.

mod categories;
mod content;
mod orders;
mod products;
mod settings;

pub use products::ProductQuery;
