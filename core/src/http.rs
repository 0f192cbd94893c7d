//! HTTP request/response values as plain data.
//!
//! # Design
//! The API layer builds `HttpRequest` values and parses `HttpResponse`
//! values without ever touching the network; a [`Transport`] implementation
//! executes the round-trip in between. This keeps everything up to the wire
//! deterministic and testable with scripted responses.
//!
//! All fields use owned types (`String`, `Vec`) so values can be stored,
//! logged, or replayed without lifetime concerns.
//!
//! [`Transport`]: crate::transport::Transport

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// True for any 2xx status. The client treats every non-2xx status
    /// uniformly as failure, with no distinction by code.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
