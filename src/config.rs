//! Engine configuration loaded from environment variables.
//!
//! Configuration is loaded once at wiring time and validated before the
//! engine is handed to the host's hooks.
//!
//! ## Configuration Methods
//!
//! ### Method 1: Full URL (simpler for local development)
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379/0"
//! ```
//!
//! ### Method 2: Individual components (recommended for production)
//!
//! ```bash
//! export REDIS_HOST="localhost"
//! export REDIS_PORT="6379"
//! export REDIS_PASSWORD=""
//! export REDIS_DB="0"
//! ```
//!
//! If `REDIS_URL` is not set, it will be automatically constructed from
//! `REDIS_HOST`, `REDIS_PORT`, `REDIS_PASSWORD`, and `REDIS_DB`. With
//! neither set, caching is disabled and every fee request recomputes.
//!
//! ## Optional Variables
//!
//! - `REDIS_URL` / `REDIS_HOST` - Redis connection (enables caching if set)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `FEE_CACHE_TTL_SECONDS` - TTL for cached fee results (default: 300)
//! - `OPTIONS_CACHE_TTL_SECONDS` - TTL for the cached configuration (default: 3600)

use anyhow::Result;
use std::env;

/// Engine configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub redis_url: Option<String>,
    pub log_level: String,
    pub log_format: String,
    /// TTL (seconds) for cached computed fee results. Results go stale as
    /// soon as the cart changes, so this stays short.
    pub fee_cache_ttl_seconds: u64,
    /// TTL (seconds) for the cached fee configuration loaded from the
    /// settings store.
    pub options_cache_ttl_seconds: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let redis_url = Self::load_redis_url();

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let fee_cache_ttl_seconds = env::var("FEE_CACHE_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(300);

        let options_cache_ttl_seconds = env::var("OPTIONS_CACHE_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3600);

        Self {
            redis_url,
            log_level,
            log_format,
            fee_cache_ttl_seconds,
            options_cache_ttl_seconds,
        }
    }

    /// Loads Redis URL with fallback to component-based configuration.
    ///
    /// Priority:
    /// 1. `REDIS_URL` environment variable
    /// 2. Constructed from `REDIS_HOST`, `REDIS_PORT`, `REDIS_PASSWORD`, `REDIS_DB`
    ///
    /// Returns `None` if Redis is not configured.
    fn load_redis_url() -> Option<String> {
        // Priority 1: Use REDIS_URL if provided
        if let Ok(url) = env::var("REDIS_URL") {
            return Some(url);
        }

        // Priority 2: Build from components (if REDIS_HOST is set)
        let host = env::var("REDIS_HOST").ok()?;
        let port = env::var("REDIS_PORT").unwrap_or_else(|_| "6379".to_string());
        let password = env::var("REDIS_PASSWORD").ok();
        let db = env::var("REDIS_DB").unwrap_or_else(|_| "0".to_string());

        let url = if let Some(pwd) = password {
            // Empty password means no authentication
            if pwd.is_empty() {
                format!("redis://{}:{}/{}", host, port, db)
            } else {
                format!("redis://:{}@{}:{}/{}", pwd, host, port, db)
            }
        } else {
            format!("redis://{}:{}/{}", host, port, db)
        };

        Some(url)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - a cache TTL is zero
    /// - `redis_url` has an unexpected scheme
    pub fn validate(&self) -> Result<()> {
        // Validate log format
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        // Validate Redis URL format (if present)
        if let Some(ref redis_url) = self.redis_url
            && !redis_url.starts_with("redis://")
            && !redis_url.starts_with("rediss://")
        {
            anyhow::bail!(
                "REDIS_URL must start with 'redis://' or 'rediss://', got '{}'",
                redis_url
            );
        }

        // Validate cache TTLs
        if self.fee_cache_ttl_seconds == 0 {
            anyhow::bail!("FEE_CACHE_TTL_SECONDS must be greater than 0");
        }
        if self.options_cache_ttl_seconds == 0 {
            anyhow::bail!("OPTIONS_CACHE_TTL_SECONDS must be greater than 0");
        }

        Ok(())
    }

    /// Returns whether Redis caching is enabled.
    pub fn is_cache_enabled(&self) -> bool {
        self.redis_url.is_some()
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");

        if let Some(ref redis_url) = self.redis_url {
            tracing::info!("  Redis: {} (enabled)", mask_connection_string(redis_url));
        } else {
            tracing::info!("  Redis: disabled");
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Fee cache TTL: {}s", self.fee_cache_ttl_seconds);
        tracing::info!("  Options cache TTL: {}s", self.options_cache_ttl_seconds);
    }
}

/// Masks sensitive information in connection strings for logging.
///
/// Replaces password with `***` in URLs like:
/// - `redis://:password@host:port/db` → `redis://:***@host:port/db`
fn mask_connection_string(url: &str) -> String {
    if let Some(start) = url.find("://") {
        let scheme_end = start + 3;
        let rest = &url[scheme_end..];

        if let Some(at_pos) = rest.find('@') {
            let credentials = &rest[..at_pos];
            let host_part = &rest[at_pos..];

            // Check if there's a password (contains ':')
            if let Some(colon_pos) = credentials.rfind(':') {
                let username = &credentials[..colon_pos];
                return format!("{}://{}:***{}", &url[..start], username, host_part);
            }
        }
    }

    url.to_string()
}

/// Loads and validates configuration from environment variables.
///
/// Reads a `.env` file first when one is present, then the process
/// environment.
///
/// # Errors
///
/// Returns an error if validation fails.
pub fn load_from_env() -> Result<Config> {
    let _ = dotenvy::dotenv();
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_mask_connection_string() {
        assert_eq!(
            mask_connection_string("redis://:password@localhost:6379/0"),
            "redis://:***@localhost:6379/0"
        );

        assert_eq!(
            mask_connection_string("redis://localhost:6379/0"),
            "redis://localhost:6379/0"
        );
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config {
            redis_url: None,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            fee_cache_ttl_seconds: 300,
            options_cache_ttl_seconds: 3600,
        };

        assert!(config.validate().is_ok());

        // Test invalid log format
        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        // Test invalid Redis URL
        config.redis_url = Some("http://localhost:6379".to_string());
        assert!(config.validate().is_err());

        config.redis_url = Some("redis://localhost:6379/0".to_string());
        assert!(config.validate().is_ok());

        // Test zero TTLs
        config.fee_cache_ttl_seconds = 0;
        assert!(config.validate().is_err());

        config.fee_cache_ttl_seconds = 300;
        config.options_cache_ttl_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_load_redis_url_from_components() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("REDIS_HOST", "redis-host");
            env::set_var("REDIS_PORT", "6380");
            env::set_var("REDIS_DB", "1");
        }

        let url = Config::load_redis_url().unwrap();
        assert_eq!(url, "redis://redis-host:6380/1");

        // Test with password
        unsafe {
            env::set_var("REDIS_PASSWORD", "secret");
        }
        let url = Config::load_redis_url().unwrap();
        assert_eq!(url, "redis://:secret@redis-host:6380/1");

        // Test with empty password (should be treated as no password)
        unsafe {
            env::set_var("REDIS_PASSWORD", "");
        }
        let url = Config::load_redis_url().unwrap();
        assert_eq!(url, "redis://redis-host:6380/1");

        // Cleanup
        unsafe {
            env::remove_var("REDIS_HOST");
            env::remove_var("REDIS_PORT");
            env::remove_var("REDIS_DB");
            env::remove_var("REDIS_PASSWORD");
        }
    }

    #[test]
    #[serial]
    fn test_redis_url_priority() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("REDIS_URL", "redis://from-url:6379/0");
            env::set_var("REDIS_HOST", "from-components");
        }

        let url = Config::load_redis_url().unwrap();

        // REDIS_URL should take priority
        assert!(url.contains("from-url"));
        assert!(!url.contains("from-components"));

        // Cleanup
        unsafe {
            env::remove_var("REDIS_URL");
            env::remove_var("REDIS_HOST");
        }
    }

    #[test]
    #[serial]
    fn test_ttl_defaults() {
        // SAFETY: Tests are run serially
        unsafe {
            env::remove_var("FEE_CACHE_TTL_SECONDS");
            env::remove_var("OPTIONS_CACHE_TTL_SECONDS");
        }

        let config = Config::from_env();
        assert_eq!(config.fee_cache_ttl_seconds, 300);
        assert_eq!(config.options_cache_ttl_seconds, 3600);
    }
}
