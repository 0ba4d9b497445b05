//! Persistence seam for the cart store.
//!
//! The store persists its items through this trait after every mutation,
//! and seeds itself from it once at construction. Backends live in
//! `atelier-store`; the in-memory backend here is the default for tests
//! and ephemeral sessions.

use crate::line::CartLine;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use thiserror::Error;

/// Fixed key/file-stem under which the cart document is stored.
pub const CART_STORAGE_KEY: &str = "atelier-cart";

/// Errors a storage backend can report on save.
///
/// Loads never error: a backend that cannot produce a valid document
/// yields an empty cart instead.
#[derive(Error, Debug)]
pub enum CartStorageError {
    /// Failed to serialize the cart document.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Failed to write to the backing store.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Backend-specific failure.
    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// The persisted cart shape: items only.
///
/// The open/closed drawer flag is deliberately excluded; a reloaded cart
/// always starts closed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CartDocument {
    /// Cart lines in display order.
    pub items: Vec<CartLine>,
}

/// A durable slot for the cart document.
pub trait CartRepository {
    /// Load the persisted items, or an empty list when nothing usable is
    /// stored. Must not fail: corrupt data degrades to an empty cart.
    fn load(&self) -> Vec<CartLine>;

    /// Persist the items, replacing whatever was stored before.
    fn save(&self, items: &[CartLine]) -> Result<(), CartStorageError>;
}

/// In-memory repository holding the serialized document.
///
/// Serializes through JSON like the durable backends so tests exercise the
/// same round trip.
#[derive(Debug, Default)]
pub struct MemoryCartStore {
    slot: RefCell<Option<String>>,
}

impl MemoryCartStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a raw document, as a previous
    /// session would have left it.
    pub fn with_raw_document(raw: impl Into<String>) -> Self {
        Self {
            slot: RefCell::new(Some(raw.into())),
        }
    }

    /// The raw stored document, if any.
    pub fn raw_document(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl CartRepository for MemoryCartStore {
    fn load(&self) -> Vec<CartLine> {
        let slot = self.slot.borrow();
        let Some(raw) = slot.as_deref() else {
            return Vec::new();
        };
        match serde_json::from_str::<CartDocument>(raw) {
            Ok(document) => document.items,
            Err(err) => {
                tracing::warn!(error = %err, "stored cart unreadable, starting empty");
                Vec::new()
            }
        }
    }

    fn save(&self, items: &[CartLine]) -> Result<(), CartStorageError> {
        let document = CartDocument {
            items: items.to_vec(),
        };
        let raw = serde_json::to_string(&document)?;
        *self.slot.borrow_mut() = Some(raw);
        Ok(())
    }
}
