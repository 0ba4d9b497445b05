//! The API client core.

use crate::error::FetchError;
use crate::request::{Method, RequestBuilder};
use crate::response::Response;
use crate::retry::RetryPolicy;
use crate::timeout::TimeoutConfig;
use crate::transport::{HttpTransport, Request};
use std::collections::HashMap;
use tracing::warn;

/// Typed client for the storefront REST API.
///
/// Holds the base URL, default headers, retry/timeout policy and the
/// injected transport. Endpoint methods live in the `endpoints` modules
/// and all funnel through [`ApiClient::send`].
pub struct ApiClient {
    base_url: String,
    default_headers: HashMap<String, String>,
    retry: RetryPolicy,
    timeout: TimeoutConfig,
    transport: Box<dyn HttpTransport>,
}

impl ApiClient {
    /// Create a client for the given API origin.
    pub fn new(base_url: impl Into<String>, transport: Box<dyn HttpTransport>) -> Self {
        Self {
            base_url: base_url.into(),
            default_headers: HashMap::new(),
            retry: RetryPolicy::default(),
            timeout: TimeoutConfig::default(),
            transport,
        }
    }

    /// Add a default header included in every request.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Authenticate every request with a bearer token (admin console).
    pub fn with_bearer_token(self, token: impl AsRef<str>) -> Self {
        self.with_default_header("Authorization", format!("Bearer {}", token.as_ref()))
    }

    /// Set the retry policy.
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Set the timeout configuration.
    pub fn with_timeout(mut self, timeout: TimeoutConfig) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create a GET request for an API path.
    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::Get, path)
    }

    /// Create a POST request for an API path.
    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.request(Method::Post, path)
    }

    /// Create a PUT request for an API path.
    pub(crate) fn put(&self, path: &str) -> RequestBuilder {
        self.request(Method::Put, path)
    }

    /// Create a DELETE request for an API path.
    pub(crate) fn delete(&self, path: &str) -> RequestBuilder {
        self.request(Method::Delete, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), path);
        let mut builder = RequestBuilder::new(method, url);
        for (key, value) in &self.default_headers {
            builder = builder.header(key.clone(), value.clone());
        }
        builder
    }

    /// Execute a request through the transport, applying the retry policy.
    pub(crate) fn send(&self, builder: RequestBuilder) -> Result<Response, FetchError> {
        let request = Request {
            method: builder.method,
            url: builder.full_url(),
            headers: builder.headers,
            body: builder.body,
            timeout: self.timeout.total,
        };

        let mut attempt = 0u32;
        loop {
            match self.transport.execute(request.clone()) {
                Ok(response) => {
                    if self.retry.should_retry_status(response.status, attempt) {
                        warn!(
                            url = %request.url,
                            status = response.status,
                            attempt,
                            "retrying request after error status"
                        );
                    } else {
                        return Ok(response);
                    }
                }
                Err(FetchError::Timeout) if self.retry.should_retry_timeout(attempt) => {
                    warn!(url = %request.url, attempt, "retrying request after timeout");
                }
                Err(FetchError::RequestError(message))
                    if self.retry.should_retry_connection(attempt) =>
                {
                    warn!(
                        url = %request.url,
                        attempt,
                        error = %message,
                        "retrying request after connection error"
                    );
                }
                Err(err) => return Err(err),
            }

            let delay = self.retry.backoff.delay_for_attempt(attempt);
            if !delay.is_zero() {
                std::thread::sleep(delay);
            }
            attempt += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::retry::BackoffStrategy;
    use crate::transport::ScriptedTransport;
    use std::rc::Rc;
    use std::time::Duration;

    // Shares the transport between the test and the client.
    struct Shared(Rc<ScriptedTransport>);
    impl HttpTransport for Shared {
        fn execute(&self, request: Request) -> Result<Response, FetchError> {
            self.0.execute(request)
        }
    }

    fn client_with(transport: Rc<ScriptedTransport>) -> ApiClient {
        ApiClient::new("https://api.example/", Box::new(Shared(transport)))
            .with_retry_policy(
                RetryPolicy::new(2).with_backoff(BackoffStrategy::Fixed(Duration::ZERO)),
            )
    }

    #[test]
    fn test_base_url_join_avoids_double_slash() {
        let transport = Rc::new(
            ScriptedTransport::new().respond(Response::json_body(200, b"{}".to_vec())),
        );
        let client = client_with(Rc::clone(&transport));

        client.send(client.get("/settings/theme")).unwrap();
        assert_eq!(
            transport.requests()[0].url,
            "https://api.example/settings/theme"
        );
    }

    #[test]
    fn test_default_headers_applied() {
        let transport = Rc::new(
            ScriptedTransport::new().respond(Response::json_body(200, b"{}".to_vec())),
        );
        let client = client_with(Rc::clone(&transport)).with_bearer_token("tok");

        client.send(client.get("/products")).unwrap();
        assert_eq!(
            transport.requests()[0].headers.get("Authorization").map(String::as_str),
            Some("Bearer tok")
        );
    }

    #[test]
    fn test_retries_server_error_then_succeeds() {
        let transport = Rc::new(
            ScriptedTransport::new()
                .respond(Response::json_body(503, b"{}".to_vec()))
                .respond(Response::json_body(200, b"{}".to_vec())),
        );
        let client = client_with(Rc::clone(&transport));

        let response = client.send(client.get("/products")).unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(transport.requests().len(), 2);
    }

    #[test]
    fn test_gives_up_after_max_attempts() {
        let transport = Rc::new(
            ScriptedTransport::new()
                .respond(Response::json_body(503, b"{}".to_vec()))
                .respond(Response::json_body(503, b"{}".to_vec()))
                .respond(Response::json_body(503, b"{}".to_vec())),
        );
        let client = client_with(Rc::clone(&transport));

        let response = client.send(client.get("/products")).unwrap();
        assert_eq!(response.status, 503);
        assert_eq!(transport.requests().len(), 3);
    }

    #[test]
    fn test_client_error_not_retried() {
        let transport = Rc::new(
            ScriptedTransport::new().respond(Response::json_body(404, b"{}".to_vec())),
        );
        let client = client_with(Rc::clone(&transport));

        let response = client.send(client.get("/products/ghost")).unwrap();
        assert_eq!(response.status, 404);
        assert_eq!(transport.requests().len(), 1);
    }

    #[test]
    fn test_retries_timeout() {
        let transport = Rc::new(
            ScriptedTransport::new()
                .fail(FetchError::Timeout)
                .respond(Response::json_body(200, b"{}".to_vec())),
        );
        let client = client_with(Rc::clone(&transport));

        let response = client.send(client.get("/products")).unwrap();
        assert_eq!(response.status, 200);
    }
}
