//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honored for local development.

use std::env;
use std::time::Duration;

/// Default backend API base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the backend REST API (no trailing slash)
    pub api_url: String,
    /// Browser-facing URL, used as the allowed CORS origin
    pub frontend_url: String,
    /// Server port
    pub port: u16,
    /// Deployment environment (`production`, `development`, ...)
    pub environment: String,
    /// Directory with a prebuilt front end to serve as the fallback
    pub static_dir: Option<String>,
    /// Upper bound on a single backend call
    pub backend_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let api_url = env::var("API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            return Err(ConfigError::Invalid("API_URL", api_url));
        }

        let backend_timeout = match env::var("BACKEND_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::Invalid("BACKEND_TIMEOUT_SECS", raw))?,
            Err(_) => Duration::from_secs(30),
        };

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
            environment: env::var("NODE_ENV")
                .or_else(|_| env::var("APP_ENV"))
                .unwrap_or_else(|_| "development".to_string()),
            static_dir: env::var("STATIC_DIR").ok().filter(|dir| !dir.is_empty()),
            backend_timeout,
        })
    }

    /// Config for tests, pointed at the given backend.
    pub fn test_default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            frontend_url: "http://localhost:3000".to_string(),
            port: 3000,
            environment: "test".to_string(),
            static_dir: None,
            backend_timeout: Duration::from_secs(5),
        }
    }

    /// Whether the session cookie carries the `Secure` attribute.
    pub fn secure_cookies(&self) -> bool {
        self.environment == "production"
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1}")]
    Invalid(&'static str, String),
}
