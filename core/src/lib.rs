//! Stateful client for a remote todo collection resource.
//!
//! # Overview
//! [`TodoApp`] is a view-model: it caches the server's todo list in memory,
//! tracks the surrounding UI state (loading flag, dismissible error, display
//! filter, one edit draft, create-form buffers), and exposes one operation
//! per discrete UI event. Each operation runs a single HTTP round-trip
//! against the collection resource and reconciles the server's response into
//! local state; any failure becomes a fixed, visible error message rather
//! than a panic or a propagated error.
//!
//! # Design
//! - [`TodoApi`] is stateless and splits every operation into `build_*`
//!   (produces an [`HttpRequest`]) and `parse_*` (consumes an
//!   [`HttpResponse`]), keeping the wire format testable without a network.
//! - The [`Transport`] trait is the only I/O seam. [`UreqTransport`] drives
//!   real HTTP; tests script responses.
//! - The base URL is explicit configuration ([`Config`]), defaulting to
//!   `/api`.
//! - The presentation layer and the delete confirmation prompt are external:
//!   rendering reads the accessors, and [`TodoApp::delete`] takes the yes/no
//!   decision as a closure.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use api::TodoApi;
pub use app::{EditDraft, Filter, TodoApp};
pub use config::Config;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{Transport, UreqTransport};
pub use types::{CreateTodo, Todo, UpdateTodo};
