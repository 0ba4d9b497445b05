//! Pluggable HTTP transport.
//!
//! The embedding shell (browser runtime, native app, test harness) owns
//! the actual network stack and hands the client an implementation of
//! [`HttpTransport`].

use crate::error::FetchError;
use crate::request::Method;
use crate::response::Response;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::time::Duration;

/// A finalized request as handed to the transport.
#[derive(Debug, Clone)]
pub struct Request {
    /// HTTP method.
    pub method: Method,
    /// Full URL including query string.
    pub url: String,
    /// Request headers.
    pub headers: HashMap<String, String>,
    /// Request body.
    pub body: Option<Vec<u8>>,
    /// Total timeout budget the transport should enforce.
    pub timeout: Duration,
}

/// Synchronous HTTP execution.
///
/// Implementations map their own failure modes onto `FetchError`
/// (`Timeout` for deadline overruns, `RequestError` for connection
/// failures) so retry policies can classify them.
pub trait HttpTransport {
    /// Execute the request and return the raw response.
    fn execute(&self, request: Request) -> Result<Response, FetchError>;
}

/// Transport that replays a scripted sequence of results.
///
/// Each executed request consumes the next scripted result and is
/// recorded for inspection. Running past the script returns a request
/// error. Used by endpoint tests and demos in place of a live backend.
#[derive(Default)]
pub struct ScriptedTransport {
    script: RefCell<VecDeque<Result<Response, FetchError>>>,
    requests: RefCell<Vec<Request>>,
}

impl ScriptedTransport {
    /// Create an empty scripted transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response.
    pub fn respond(self, response: Response) -> Self {
        self.script.borrow_mut().push_back(Ok(response));
        self
    }

    /// Queue a failure.
    pub fn fail(self, error: FetchError) -> Self {
        self.script.borrow_mut().push_back(Err(error));
        self
    }

    /// Requests executed so far.
    pub fn requests(&self) -> Vec<Request> {
        self.requests.borrow().clone()
    }

    /// Number of scripted results not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.borrow().len()
    }
}

impl HttpTransport for ScriptedTransport {
    fn execute(&self, request: Request) -> Result<Response, FetchError> {
        self.requests.borrow_mut().push(request);
        self.script
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::RequestError("script exhausted".to_string())))
    }
}
