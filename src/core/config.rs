//! Application configuration.
//!
//! `WidgetConfig` describes where the session widget talks to and stores data.
//! `Config` is the server side, loaded with `Config::from_env()` after calling
//! `dotenvy::dotenv()`.

use super::store::SESSION_KEY;

/// Default login endpoint, relative to the page origin
pub const DEFAULT_LOGIN_ENDPOINT: &str = "/auth/login";

/// Session widget configuration
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetConfig {
    /// Login endpoint URL; credentials are appended as query parameters
    pub login_endpoint: String,
    /// localStorage key holding the teacher record
    pub storage_key: String,
}

impl WidgetConfig {
    pub fn with_login_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.login_endpoint = endpoint.into();
        self
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            login_endpoint: DEFAULT_LOGIN_ENDPOINT.to_string(),
            storage_key: SESSION_KEY.to_string(),
        }
    }
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory served under `/static`
    /// Example: ./static
    pub static_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            static_dir: std::env::var("STATIC_DIR").ok(),
        }
    }

    /// Check if a static asset directory is configured
    pub fn has_static_dir(&self) -> bool {
        self.static_dir.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
