//! Configuration module for the ROHIS client.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::path::PathBuf;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the REST backend
    pub api_url: String,
    /// Path of the persisted credential token; unset means in-memory only
    pub token_path: Option<PathBuf>,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let api_url =
            env::var("ROHIS_API_URL").unwrap_or_else(|_| "http://127.0.0.1:5000".to_string());

        let token_path = env::var("ROHIS_TOKEN_PATH").ok().map(PathBuf::from);

        let log_level = env::var("ROHIS_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            api_url,
            token_path,
            log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("ROHIS_API_URL");
        env::remove_var("ROHIS_TOKEN_PATH");
        env::remove_var("ROHIS_LOG_LEVEL");

        let config = Config::from_env();

        assert_eq!(config.api_url, "http://127.0.0.1:5000");
        assert!(config.token_path.is_none());
        assert_eq!(config.log_level, "info");
    }
}
