//! Checkout and order tracking types.
//!
//! The backend performs price verification, stock decrement and order
//! persistence; this module only shapes what gets posted and what comes
//! back for the tracking page.

mod address;
mod order;

pub use address::ShippingAddress;
pub use order::{
    Order, OrderItemPayload, OrderLine, OrderStatus, PaymentMethod, PlaceOrderPayload,
};
