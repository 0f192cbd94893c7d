//! Client configuration.
//!
//! The API base path is an explicit value passed in at construction, not a
//! module-level global. `from_env` exists for binaries that want the
//! conventional environment override.

/// Base path used when no configuration is provided.
pub const DEFAULT_API_BASE_URL: &str = "/api";

/// Environment variable consulted by [`Config::from_env`].
pub const API_URL_ENV: &str = "TODO_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the collection resource, e.g. `http://localhost:3000/api`.
    pub api_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl Config {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
        }
    }

    /// Read `TODO_API_URL`, falling back to [`DEFAULT_API_BASE_URL`] when the
    /// variable is unset or empty.
    pub fn from_env() -> Self {
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }
}
