//! Configuration module for the HBS backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Path of the JSON file caching the signed-in identity across restarts
    pub session_path: PathBuf,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Cosmetic delay before sign-in resolves, in milliseconds
    pub sign_in_delay_ms: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let bind_addr = env::var("HBS_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .expect("Invalid HBS_BIND_ADDR format");

        let session_path = env::var("HBS_SESSION_PATH")
            .unwrap_or_else(|_| "./data/session.json".to_string())
            .into();

        let log_level = env::var("HBS_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let sign_in_delay_ms = env::var("HBS_SIGN_IN_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(500);

        Self {
            bind_addr,
            session_path,
            log_level,
            sign_in_delay_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("HBS_BIND_ADDR");
        env::remove_var("HBS_SESSION_PATH");
        env::remove_var("HBS_LOG_LEVEL");
        env::remove_var("HBS_SIGN_IN_DELAY_MS");

        let config = Config::from_env();

        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.session_path, PathBuf::from("./data/session.json"));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.sign_in_delay_ms, 500);
    }
}
