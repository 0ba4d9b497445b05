//! Order placement and tracking endpoints.

use crate::client::ApiClient;
use crate::error::FetchError;
use atelier_commerce::checkout::{Order, PlaceOrderPayload};
use atelier_commerce::OrderId;

impl ApiClient {
    /// Submit an order.
    ///
    /// The backend verifies every price and stock level; the returned
    /// order carries the authoritative totals. On success the caller
    /// clears the cart.
    pub fn place_order(&self, payload: &PlaceOrderPayload) -> Result<Order, FetchError> {
        self.send(self.post("/orders").json(payload)?)?
            .error_for_status()?
            .json()
    }

    /// Fetch an order for the tracking page.
    pub fn order(&self, id: &OrderId) -> Result<Order, FetchError> {
        self.send(self.get(&format!("/orders/{}", id)))?
            .error_for_status()?
            .json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::Response;
    use crate::transport::{HttpTransport, Request, ScriptedTransport};
    use atelier_commerce::checkout::{OrderItemPayload, PaymentMethod, ShippingAddress};
    use atelier_commerce::ProductId;
    use std::rc::Rc;

    struct Shared(Rc<ScriptedTransport>);
    impl HttpTransport for Shared {
        fn execute(&self, request: Request) -> Result<Response, FetchError> {
            self.0.execute(request)
        }
    }

    fn payload() -> PlaceOrderPayload {
        PlaceOrderPayload {
            items: vec![OrderItemPayload {
                product_id: ProductId::new("p1"),
                quantity: 2,
                size: Some("M".to_string()),
                color: None,
            }],
            shipping_address: ShippingAddress {
                full_name: "Ada Moreau".to_string(),
                line1: "12 Rue Cambon".to_string(),
                city: "Paris".to_string(),
                postal_code: "75001".to_string(),
                country: "FR".to_string(),
                ..Default::default()
            },
            payment_method: PaymentMethod::Card,
            email: "ada@example.com".to_string(),
        }
    }

    #[test]
    fn test_place_order_posts_payload() {
        let body = br#"{
            "id": "o1",
            "orderNumber": "ATL-1756383000",
            "email": "ada@example.com",
            "status": "pending",
            "items": [
                {"productId":"p1","name":"Dress","quantity":2,"unitPrice":189.0,"size":"M"}
            ],
            "subtotal": 378.0,
            "grandTotal": 378.0
        }"#
        .to_vec();
        let transport = Rc::new(ScriptedTransport::new().respond(Response::json_body(201, body)));
        let client = ApiClient::new("https://api.example", Box::new(Shared(Rc::clone(&transport))));

        let order = client.place_order(&payload()).unwrap();
        assert_eq!(order.order_number, "ATL-1756383000");
        assert_eq!(order.item_count(), 2);

        let request = &transport.requests()[0];
        assert_eq!(request.method.as_str(), "POST");
        assert_eq!(request.url, "https://api.example/orders");

        let sent: serde_json::Value =
            serde_json::from_slice(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(sent["items"][0]["productId"], "p1");
        assert_eq!(sent["paymentMethod"], "card");
        // Cart prices never travel to the order API.
        assert!(sent["items"][0].get("price").is_none());
    }

    #[test]
    fn test_order_tracking_fetch() {
        let body = br#"{
            "id": "o1",
            "orderNumber": "ATL-1",
            "email": "ada@example.com",
            "status": "shipped",
            "items": [],
            "subtotal": 0.0,
            "grandTotal": 0.0
        }"#
        .to_vec();
        let transport = Rc::new(ScriptedTransport::new().respond(Response::json_body(200, body)));
        let client = ApiClient::new("https://api.example", Box::new(Shared(Rc::clone(&transport))));

        let order = client.order(&OrderId::new("o1")).unwrap();
        assert_eq!(order.status.timeline_step(), Some(2));
        assert_eq!(transport.requests()[0].url, "https://api.example/orders/o1");
    }
}
