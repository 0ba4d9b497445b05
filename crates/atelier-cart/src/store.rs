//! The cart store.

use crate::key::LineKey;
use crate::line::CartLine;
use crate::repository::CartRepository;
use atelier_commerce::checkout::OrderItemPayload;
use tracing::{debug, warn};

/// The authoritative client-side cart: an ordered list of lines with
/// at-most-one-line-per-key semantics, plus the drawer visibility flag.
///
/// Every operation is total: out-of-range quantities normalize to a
/// removal and missing keys are no-ops. Each mutation persists the items
/// through the injected repository; a failed save is logged and swallowed
/// since a lost cart is recoverable by the shopper.
pub struct CartStore {
    items: Vec<CartLine>,
    is_open: bool,
    repository: Box<dyn CartRepository>,
}

impl CartStore {
    /// Create a store seeded from the repository.
    ///
    /// The drawer always starts closed, whatever the previous session did.
    pub fn new(repository: Box<dyn CartRepository>) -> Self {
        let items = repository.load();
        Self {
            items,
            is_open: false,
            repository,
        }
    }

    /// Add a line to the cart and open the drawer.
    ///
    /// If a line with the same `(product, size, color)` key exists, the
    /// incoming quantity is added to it and the incoming display fields
    /// are discarded: the cached name/price of the first add wins. New
    /// keys append, preserving insertion order.
    ///
    /// Quantities are not validated against stock; that is the backend's
    /// concern at order placement.
    pub fn add_item(&mut self, line: CartLine) {
        let key = line.key();
        if let Some(existing) = self.items.iter_mut().find(|l| l.key() == key) {
            existing.quantity = existing.quantity.saturating_add(line.quantity);
            debug!(%key, quantity = existing.quantity, "merged cart line");
        } else {
            debug!(%key, quantity = line.quantity, "added cart line");
            self.items.push(line);
        }
        self.is_open = true;
        self.persist();
    }

    /// Remove the line with the given key. No-op when absent.
    pub fn remove_item(&mut self, key: &LineKey) {
        let len_before = self.items.len();
        self.items.retain(|l| &l.key() != key);
        if self.items.len() < len_before {
            debug!(%key, "removed cart line");
            self.persist();
        }
    }

    /// Set the quantity of the line with the given key.
    ///
    /// A quantity of zero removes the line rather than keeping an empty
    /// one. Otherwise the line keeps its position and display fields.
    /// No-op when the key is absent.
    pub fn update_quantity(&mut self, key: &LineKey, quantity: u32) {
        if quantity < 1 {
            self.remove_item(key);
            return;
        }
        if let Some(line) = self.items.iter_mut().find(|l| &l.key() == key) {
            line.quantity = quantity;
            debug!(%key, quantity, "updated cart line quantity");
            self.persist();
        }
    }

    /// Empty the cart. The drawer flag is left as-is.
    pub fn clear(&mut self) {
        self.items.clear();
        debug!("cleared cart");
        self.persist();
    }

    /// Toggle the drawer.
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Open the drawer.
    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Close the drawer.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Whether the drawer is open.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Lines in display (insertion) order.
    pub fn items(&self) -> &[CartLine] {
        &self.items
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Find a line by key.
    pub fn get(&self, key: &LineKey) -> Option<&CartLine> {
        self.items.iter().find(|l| &l.key() == key)
    }

    /// Total quantity across all lines.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|l| l.quantity).sum()
    }

    /// Sum of line extended prices, sale price winning where present.
    ///
    /// Plain f64 arithmetic with no rounding; display formatting and
    /// authoritative totals are the caller's and backend's concern.
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(|l| l.line_total()).sum()
    }

    /// Reduce the cart to order API payload items.
    pub fn order_items(&self) -> Vec<OrderItemPayload> {
        self.items.iter().map(CartLine::to_order_item).collect()
    }

    fn persist(&self) {
        if let Err(err) = self.repository.save(&self.items) {
            warn!(error = %err, "failed to persist cart, keeping in-memory state");
        }
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("items", &self.items)
            .field("is_open", &self.is_open)
            .finish_non_exhaustive()
    }
}
