//! Error types for the todo API client.
//!
//! # Design
//! Every non-2xx response lands in `Http` with the raw status code and body
//! for debugging — the client makes no per-status-code distinction, so there
//! is exactly one HTTP-failure variant. All variants are terminal and locally
//! recovered: the view-model converts them into visible error state and no
//! failure ever propagates past it.

use std::fmt;

/// Errors returned by the API layer and by [`Transport`] implementations.
///
/// [`Transport`]: crate::transport::Transport
#[derive(Debug)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    Http { status: u16, body: String },

    /// The request never completed — connection refused, DNS failure,
    /// broken stream, and the like.
    Transport(String),

    /// The request payload could not be serialized to JSON.
    Serialization(String),

    /// The response body could not be deserialized into the expected type.
    Deserialization(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http { status, body } => write!(f, "HTTP {status}: {body}"),
            ApiError::Transport(msg) => write!(f, "transport failed: {msg}"),
            ApiError::Serialization(msg) => write!(f, "serialization failed: {msg}"),
            ApiError::Deserialization(msg) => write!(f, "deserialization failed: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}
