//! Walk-through of the Atelier client stack: a file-persisted cart, the
//! variant merge rules, and the payload a checkout would post. The API
//! client runs against a scripted transport in place of a live backend.

use anyhow::Result;
use atelier_api::{ApiClient, Response, ScriptedTransport};
use atelier_cart::{CartLine, CartStore, LineKey};
use atelier_commerce::checkout::{PaymentMethod, PlaceOrderPayload, ShippingAddress};
use atelier_store::FileCartStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let data_dir = std::env::temp_dir().join("atelier-demo");
    let mut cart = CartStore::new(Box::new(FileCartStore::in_dir(&data_dir)));
    info!(items = cart.items().len(), "cart seeded from disk");

    // Browse: the storefront would fetch these from the real API.
    let client = catalog_client();
    let products = client.list_products(&Default::default())?;
    info!(count = products.len(), "fetched catalog");

    // Add the dress twice in the same size: one line, quantity 3.
    let dress = &products[0];
    let line = |quantity: u32| {
        CartLine::new(
            dress.id.clone(),
            dress.name.clone(),
            dress.slug.clone(),
            dress.price,
            quantity,
        )
    };
    cart.add_item(line(1).with_size("M").with_color("Noir", "#1a1a1a"));
    cart.add_item(line(2).with_size("M").with_color("Noir", "#1a1a1a"));

    // Same dress in another size stays its own line.
    cart.add_item(line(1).with_size("S"));

    println!("lines: {}", cart.items().len());
    println!("items: {}", cart.item_count());
    println!("subtotal: {:.2}", cart.subtotal());

    // Change of heart: drop the small size.
    cart.update_quantity(&LineKey::new(dress.id.clone(), Some("S"), None), 0);
    println!("after removing size S: {} items", cart.item_count());

    // What checkout would post. Prices stay home; the backend re-quotes.
    let payload = PlaceOrderPayload {
        items: cart.order_items(),
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
    };
    println!("order payload:\n{}", serde_json::to_string_pretty(&payload)?);

    // A successful order empties the cart; the drawer flag is untouched.
    cart.clear();
    info!(items = cart.items().len(), "cart cleared after checkout");

    Ok(())
}

/// API client against a canned catalog response.
fn catalog_client() -> ApiClient {
    let catalog = serde_json::json!([
        {
            "id": "prod-dress-1",
            "name": "Silk Wrap Dress",
            "slug": "silk-wrap-dress",
            "price": 189.0,
            "sizes": ["S", "M", "L"],
            "colors": [{"name": "Noir", "hex": "#1a1a1a"}]
        }
    ]);
    let transport = ScriptedTransport::new()
        .respond(Response::json_body(200, catalog.to_string().into_bytes()));
    ApiClient::new("https://api.atelier.example", Box::new(transport))
}
