//! Storefront configuration loaded from environment variables.
//!
//! The catalog engine and cart manager never read the environment; this
//! module is for front ends (the CLI) that wire them up.
//!
//! # Environment Variables
//!
//! All optional:
//! - `TRADEWEAR_DATA_DIR` - Directory holding persisted slots (default: `.tradewear`)
//! - `TRADEWEAR_CART_SLOT` - Slot name for the cart (default: `ecommerce_cart`)
//! - `TRADEWEAR_CATALOG_PATH` - Catalog JSON document (default: bundled demo catalog)
//! - `TRADEWEAR_LOG_FORMAT` - `pretty` or `json` (default: `pretty`)
//! - `TRADEWEAR_LOG_CAPTURE` - Log capture buffer size, `0` disables (default: 200)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `RUST_LOG` - Tracing filter directives (read by [`crate::telemetry`])

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use crate::cart::{DEFAULT_CART_SLOT, validate_slot_name};

const DEFAULT_DATA_DIR: &str = ".tradewear";
const DEFAULT_LOG_CAPTURE: usize = 200;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory holding persisted slots
    pub data_dir: PathBuf,
    /// Slot name the cart is persisted under
    pub cart_slot: String,
    /// Catalog document to load instead of the bundled one
    pub catalog_path: Option<PathBuf>,
    /// Logging configuration
    pub log: LogConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

/// Log output configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
    pub format: LogFormat,
    /// Entries kept by the in-process log capture; `0` disables it.
    pub capture_capacity: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            capture_capacity: DEFAULT_LOG_CAPTURE,
        }
    }
}

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("expected `pretty` or `json`, got `{other}`")),
        }
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            cart_slot: DEFAULT_CART_SLOT.to_string(),
            catalog_path: None,
            log: LogConfig::default(),
            sentry_dsn: None,
            sentry_environment: None,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let data_dir = get("TRADEWEAR_DATA_DIR")
            .map_or_else(|| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from);

        let cart_slot = get("TRADEWEAR_CART_SLOT").unwrap_or_else(|| DEFAULT_CART_SLOT.to_string());
        validate_slot_name(&cart_slot).map_err(|e| {
            ConfigError::InvalidEnvVar("TRADEWEAR_CART_SLOT".to_string(), e.to_string())
        })?;

        let format = get("TRADEWEAR_LOG_FORMAT")
            .map(|value| value.parse::<LogFormat>())
            .transpose()
            .map_err(|e| ConfigError::InvalidEnvVar("TRADEWEAR_LOG_FORMAT".to_string(), e))?
            .unwrap_or_default();

        let capture_capacity = get("TRADEWEAR_LOG_CAPTURE")
            .map(|value| value.trim().parse::<usize>())
            .transpose()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("TRADEWEAR_LOG_CAPTURE".to_string(), e.to_string())
            })?
            .unwrap_or(DEFAULT_LOG_CAPTURE);

        Ok(Self {
            data_dir,
            cart_slot,
            catalog_path: get("TRADEWEAR_CATALOG_PATH").map(PathBuf::from),
            log: LogConfig {
                format,
                capture_capacity,
            },
            sentry_dsn: get("SENTRY_DSN"),
            sentry_environment: get("SENTRY_ENVIRONMENT"),
        })
    }
}
