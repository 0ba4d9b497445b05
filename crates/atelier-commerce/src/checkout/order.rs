//! Order submission payloads and tracking types.

use crate::checkout::ShippingAddress;
use crate::ids::{OrderId, ProductId};
use serde::{Deserialize, Serialize};

/// Order status as reported by the tracking endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order placed, awaiting processing.
    #[default]
    Pending,
    /// Order confirmed and processing.
    Confirmed,
    /// Order shipped.
    Shipped,
    /// Order delivered.
    Delivered,
    /// Order cancelled.
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Check if the order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Progress step for the tracking timeline (0-based; None when cancelled).
    pub fn timeline_step(&self) -> Option<usize> {
        match self {
            OrderStatus::Pending => Some(0),
            OrderStatus::Confirmed => Some(1),
            OrderStatus::Shipped => Some(2),
            OrderStatus::Delivered => Some(3),
            OrderStatus::Cancelled => None,
        }
    }
}

/// Payment method selected at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Card payment collected by the backend's payment provider.
    Card,
    /// Pay on delivery.
    CashOnDelivery,
    /// PayPal redirect flow.
    Paypal,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::CashOnDelivery => "cash_on_delivery",
            PaymentMethod::Paypal => "paypal",
        }
    }
}

/// One cart line reduced to what the order API needs.
///
/// Prices are deliberately absent: the backend re-quotes every line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemPayload {
    /// Product being ordered.
    pub product_id: ProductId,
    /// Quantity ordered.
    pub quantity: u32,
    /// Selected size, when the product has sizes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Selected color name, when the product has colors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// The complete order submission body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderPayload {
    /// Items being ordered.
    pub items: Vec<OrderItemPayload>,
    /// Where to ship.
    pub shipping_address: ShippingAddress,
    /// How the shopper pays.
    pub payment_method: PaymentMethod,
    /// Contact email for order updates.
    pub email: String,
}

impl PlaceOrderPayload {
    /// Total quantity across all items.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

/// A placed order as returned by the API for the tracking page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Human-readable order number (e.g., "ATL-1756383000").
    pub order_number: String,
    /// Contact email.
    pub email: String,
    /// Current status.
    pub status: OrderStatus,
    /// Items in the order with backend-verified prices.
    pub items: Vec<OrderLine>,
    /// Subtotal before shipping.
    pub subtotal: f64,
    /// Shipping cost.
    #[serde(default)]
    pub shipping_total: f64,
    /// Grand total charged.
    pub grand_total: f64,
    /// Unix timestamp of placement.
    #[serde(default)]
    pub created_at: i64,
}

impl Order {
    /// Generate an order number (client-side placeholder; the backend
    /// issues the real one).
    pub fn generate_order_number() -> String {
        format!("ATL-{}", current_timestamp())
    }

    /// Total quantity across all lines.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

/// A priced line on a placed order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    /// Product ordered.
    pub product_id: ProductId,
    /// Product name at order time.
    pub name: String,
    /// Quantity ordered.
    pub quantity: u32,
    /// Backend-verified unit price at order time.
    pub unit_price: f64,
    /// Selected size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Selected color name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_timeline() {
        assert_eq!(OrderStatus::Pending.timeline_step(), Some(0));
        assert_eq!(OrderStatus::Delivered.timeline_step(), Some(3));
        assert_eq!(OrderStatus::Cancelled.timeline_step(), None);
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(!OrderStatus::Shipped.is_terminal());
    }

    #[test]
    fn test_payload_item_count() {
        let payload = PlaceOrderPayload {
            items: vec![
                OrderItemPayload {
                    product_id: ProductId::new("p1"),
                    quantity: 2,
                    size: Some("M".to_string()),
                    color: None,
                },
                OrderItemPayload {
                    product_id: ProductId::new("p2"),
                    quantity: 1,
                    size: None,
                    color: Some("Noir".to_string()),
                },
            ],
            shipping_address: ShippingAddress::default(),
            payment_method: PaymentMethod::Card,
            email: "ada@example.com".to_string(),
        };

        assert_eq!(payload.item_count(), 3);
    }

    #[test]
    fn test_item_payload_omits_absent_variants() {
        let item = OrderItemPayload {
            product_id: ProductId::new("p1"),
            quantity: 1,
            size: None,
            color: None,
        };

        let json = serde_json::to_value(&item).unwrap();
        assert!(json.get("size").is_none());
        assert!(json.get("color").is_none());
        assert_eq!(json["productId"], "p1");
    }

    #[test]
    fn test_generated_order_number_prefix() {
        assert!(Order::generate_order_number().starts_with("ATL-"));
    }

    #[test]
    fn test_payment_method_wire_format() {
        let json = serde_json::to_string(&PaymentMethod::CashOnDelivery).unwrap();
        assert_eq!(json, "\"cash_on_delivery\"");
    }
}
