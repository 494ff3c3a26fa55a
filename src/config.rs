//! Configuration Module
//!
//! Handles loading the REPL configuration from environment variables, with
//! command-line flags layered on top.

use std::env;
use std::time::Duration;

use clap::Parser;

use crate::error::{PokedexError, Result};

/// Default PokeAPI root.
pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Longest accepted cache TTL (one year).
pub const MAX_CACHE_TTL: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Runtime configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Response cache lifetime; doubles as the sweep interval
    pub cache_ttl: Duration,
    /// Root of the catalog API, without trailing slash
    pub api_base_url: String,
    /// Per-request HTTP timeout
    pub http_timeout: Duration,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEDEX_CACHE_TTL_SECS` - Cache TTL and sweep interval (default: 30)
    /// - `POKEDEX_API_BASE_URL` - API root (default: https://pokeapi.co/api/v2)
    /// - `POKEDEX_HTTP_TIMEOUT_SECS` - HTTP timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_ttl: env::var("POKEDEX_CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.cache_ttl),
            api_base_url: env::var("POKEDEX_API_BASE_URL")
                .ok()
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            http_timeout: env::var("POKEDEX_HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.http_timeout),
        }
    }

    /// Applies any flags given on the command line over this config.
    pub fn with_args(mut self, args: &Args) -> Self {
        if let Some(secs) = args.cache_ttl {
            self.cache_ttl = Duration::from_secs(secs);
        }
        if let Some(url) = &args.api_url {
            self.api_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(secs) = args.timeout {
            self.http_timeout = Duration::from_secs(secs);
        }
        self
    }

    /// Rejects values the cache or client cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.cache_ttl.is_zero() {
            return Err(PokedexError::InvalidConfig(
                "cache TTL must be greater than zero".to_string(),
            ));
        }
        if self.cache_ttl > MAX_CACHE_TTL {
            return Err(PokedexError::InvalidConfig(format!(
                "cache TTL must be at most {} seconds",
                MAX_CACHE_TTL.as_secs()
            )));
        }
        if self.api_base_url.is_empty() {
            return Err(PokedexError::InvalidConfig(
                "API base URL cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl: Duration::from_secs(30),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            http_timeout: Duration::from_secs(10),
        }
    }
}

/// Pokedex - browse location areas and catch Pokemon from your terminal
#[derive(Parser, Debug, Default)]
#[command(name = "pokedex")]
#[command(about = "Interactive Pokedex backed by PokeAPI")]
#[command(version)]
pub struct Args {
    /// Response cache lifetime and sweep interval, in seconds
    #[arg(long, value_name = "SECS")]
    pub cache_ttl: Option<u64>,

    /// Base URL of the catalog API
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// HTTP request timeout, in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.cache_ttl, Duration::from_secs(30));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.http_timeout, Duration::from_secs(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("POKEDEX_CACHE_TTL_SECS");
        env::remove_var("POKEDEX_API_BASE_URL");
        env::remove_var("POKEDEX_HTTP_TIMEOUT_SECS");

        let config = Config::from_env();
        assert_eq!(config.cache_ttl, Duration::from_secs(30));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.http_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_args_override_config() {
        let args = Args::parse_from([
            "pokedex",
            "--cache-ttl",
            "5",
            "--api-url",
            "http://localhost:8080/api/",
        ]);
        let config = Config::default().with_args(&args);

        assert_eq!(config.cache_ttl, Duration::from_secs(5));
        assert_eq!(config.api_base_url, "http://localhost:8080/api");
        assert_eq!(config.http_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_no_args_keeps_config() {
        let args = Args::parse_from(["pokedex"]);
        let config = Config::default().with_args(&args);
        assert_eq!(config.cache_ttl, Duration::from_secs(30));
    }

    #[test]
    fn test_validate_rejects_zero_ttl() {
        let config = Config {
            cache_ttl: Duration::ZERO,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(PokedexError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_rejects_out_of_range_ttl() {
        let args = Args::parse_from(["pokedex", "--cache-ttl", "18446744073709551615"]);
        let config = Config::default().with_args(&args);
        assert_err!(config.validate());

        let config = Config {
            cache_ttl: MAX_CACHE_TTL,
            ..Config::default()
        };
        assert_ok!(config.validate());
    }

    #[test]
    fn test_validate_rejects_empty_base_url() {
        let config = Config {
            api_base_url: String::new(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
