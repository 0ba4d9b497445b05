//! Typed REST client for the Atelier storefront API.
//!
//! The backend owns all business logic; this crate only shapes requests
//! and parses responses into `atelier-commerce` models. The HTTP layer is
//! pluggable through [`HttpTransport`], so the embedding shell supplies
//! the real network stack and tests script responses.
//!
//! # Example
//!
//! ```rust,ignore
//! use atelier_api::ApiClient;
//!
//! let client = ApiClient::new("https://api.atelier.example", transport)
//!     .with_bearer_token(admin_token);
//!
//! let products = client.list_products(&Default::default())?;
//! let theme = client.theme_settings()?;
//! ```

mod client;
mod endpoints;
mod error;
mod request;
mod response;
mod retry;
mod timeout;
mod transport;

pub use client::ApiClient;
pub use endpoints::ProductQuery;
pub use error::FetchError;
pub use request::{Method, RequestBuilder};
pub use response::Response;
pub use retry::{BackoffStrategy, RetryCondition, RetryPolicy};
pub use timeout::TimeoutConfig;
pub use transport::{HttpTransport, Request, ScriptedTransport};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        ApiClient, FetchError, HttpTransport, Method, ProductQuery, Request, Response,
        RetryPolicy, TimeoutConfig,
    };
}
