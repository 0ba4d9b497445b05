//! Product endpoints.

use crate::client::ApiClient;
use crate::error::FetchError;
use atelier_commerce::catalog::Product;
use atelier_commerce::{CategoryId, ProductId};

/// Filters for listing products.
#[derive(Debug, Clone, Default)]
pub struct ProductQuery {
    /// Restrict to a category.
    pub category: Option<CategoryId>,
    /// Restrict to featured products.
    pub featured: Option<bool>,
    /// Restrict to products on sale.
    pub on_sale: Option<bool>,
    /// Free-text search.
    pub search: Option<String>,
}

impl ProductQuery {
    /// Query pairs in a fixed order, skipping unset filters.
    pub(crate) fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(category) = &self.category {
            pairs.push(("category", category.as_str().to_string()));
        }
        if let Some(featured) = self.featured {
            pairs.push(("featured", featured.to_string()));
        }
        if let Some(on_sale) = self.on_sale {
            pairs.push(("onSale", on_sale.to_string()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        pairs
    }
}

impl ApiClient {
    /// List products matching the query.
    pub fn list_products(&self, query: &ProductQuery) -> Result<Vec<Product>, FetchError> {
        let mut builder = self.get("/products");
        for (key, value) in query.pairs() {
            builder = builder.query(key, value);
        }
        self.send(builder)?.error_for_status()?.json()
    }

    /// Fetch a single product by slug.
    pub fn product_by_slug(&self, slug: &str) -> Result<Product, FetchError> {
        self.send(self.get(&format!("/products/{}", slug)))?
            .error_for_status()?
            .json()
    }

    /// Create a product (admin).
    pub fn create_product(&self, product: &Product) -> Result<Product, FetchError> {
        self.send(self.post("/products").json(product)?)?
            .error_for_status()?
            .json()
    }

    /// Update a product (admin).
    pub fn update_product(&self, product: &Product) -> Result<Product, FetchError> {
        self.send(self.put(&format!("/products/{}", product.id)).json(product)?)?
            .error_for_status()?
            .json()
    }

    /// Delete a product (admin).
    pub fn delete_product(&self, id: &ProductId) -> Result<(), FetchError> {
        self.send(self.delete(&format!("/products/{}", id)))?
            .error_for_status()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::Response;
    use crate::transport::{HttpTransport, Request, ScriptedTransport};
    use std::rc::Rc;

    struct Shared(Rc<ScriptedTransport>);
    impl HttpTransport for Shared {
        fn execute(&self, request: Request) -> Result<Response, FetchError> {
            self.0.execute(request)
        }
    }

    fn client_with(transport: Rc<ScriptedTransport>) -> ApiClient {
        ApiClient::new("https://api.example", Box::new(Shared(transport)))
    }

    #[test]
    fn test_list_products_builds_query() {
        let body = br#"[{"id":"p1","name":"Tote","slug":"tote","price":95.0}]"#.to_vec();
        let transport = Rc::new(ScriptedTransport::new().respond(Response::json_body(200, body)));
        let client = client_with(Rc::clone(&transport));

        let query = ProductQuery {
            category: Some(CategoryId::new("cat-bags")),
            featured: Some(true),
            ..Default::default()
        };
        let products = client.list_products(&query).unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].slug, "tote");
        assert_eq!(
            transport.requests()[0].url,
            "https://api.example/products?category=cat-bags&featured=true"
        );
    }

    #[test]
    fn test_product_by_slug_404_is_http_error() {
        let transport = Rc::new(
            ScriptedTransport::new().respond(Response::json_body(404, b"not found".to_vec())),
        );
        let client = client_with(transport);

        match client.product_by_slug("ghost") {
            Err(FetchError::HttpError { status, .. }) => assert_eq!(status, 404),
            other => panic!("expected HttpError, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_delete_product_uses_delete_method() {
        let transport = Rc::new(
            ScriptedTransport::new().respond(Response::json_body(204, Vec::new())),
        );
        let client = client_with(Rc::clone(&transport));

        client.delete_product(&ProductId::new("p1")).unwrap();
        let request = &transport.requests()[0];
        assert_eq!(request.method.as_str(), "DELETE");
        assert_eq!(request.url, "https://api.example/products/p1");
    }

    #[test]
    fn test_create_product_posts_json_body() {
        let product = Product::new("Tote", "tote", 95.0);
        let body = serde_json::to_vec(&product).unwrap();
        let transport =
            Rc::new(ScriptedTransport::new().respond(Response::json_body(201, body)));
        let client = client_with(Rc::clone(&transport));

        let created = client.create_product(&product).unwrap();
        assert_eq!(created.slug, "tote");

        let request = &transport.requests()[0];
        assert_eq!(request.method.as_str(), "POST");
        let sent: serde_json::Value =
            serde_json::from_slice(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(sent["slug"], "tote");
    }
}
