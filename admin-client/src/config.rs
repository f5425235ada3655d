//! Client configuration

use std::env;
use std::path::PathBuf;
use tracing::info;

const DEFAULT_API_URL: &str = "http://localhost:3001/api";
const DEFAULT_SESSION_DIR: &str = "./.inharmony";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for connecting to the platform API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL (e.g., "https://api.example.org/api")
    pub base_url: String,

    /// Base URL of the static image host. When absent, only images that
    /// already carry a fully qualified URL resolve.
    pub image_base_url: Option<String>,

    /// Directory for the local session mirror
    pub session_dir: PathBuf,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new configuration with defaults for everything but the API URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            image_base_url: None,
            session_dir: PathBuf::from(DEFAULT_SESSION_DIR),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set the static image host base URL.
    pub fn with_image_base_url(mut self, url: impl Into<String>) -> Self {
        self.image_base_url = Some(url.into());
        self
    }

    /// Set the session mirror directory.
    pub fn with_session_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.session_dir = dir.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Load configuration from the environment, falling back to defaults:
    /// `INHARMONY_API_URL`, `INHARMONY_IMAGE_URL`, `INHARMONY_SESSION_DIR`,
    /// `INHARMONY_HTTP_TIMEOUT`.
    pub fn from_env() -> Self {
        let base_url = env::var("INHARMONY_API_URL").unwrap_or_else(|_| {
            info!("INHARMONY_API_URL not set, using default: {DEFAULT_API_URL}");
            DEFAULT_API_URL.to_string()
        });

        let mut config = Self::new(base_url);

        if let Ok(url) = env::var("INHARMONY_IMAGE_URL") {
            config.image_base_url = Some(url);
        }
        if let Ok(dir) = env::var("INHARMONY_SESSION_DIR") {
            config.session_dir = PathBuf::from(dir);
        }
        if let Ok(timeout) = env::var("INHARMONY_HTTP_TIMEOUT") {
            match timeout.parse() {
                Ok(secs) => config.timeout = secs,
                Err(e) => info!("invalid INHARMONY_HTTP_TIMEOUT, keeping default: {e}"),
            }
        }

        config
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
