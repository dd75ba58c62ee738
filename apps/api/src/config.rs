//! Application configuration loading from environment variables.
//!
//! All configuration is loaded from the environment at startup via standard `std::env::var`.
//! A `.env` file is honoured through `dotenvy` before this runs.
//!
//! # Environment Variables
//!
//! All variables are optional.
//! - `RUST_LOG`: Logging level (default: "info,storefront_api=debug,tower_http=debug")
//! - `HOST`: Server bind address (default: "0.0.0.0")
//! - `PORT`: Server port (default: 3000)
//! - `SERVICEABLE_PINCODES_PATH`: JSON array of serviceable pincodes (default: bundled dataset)
//! - `PRODUCTS_PATH`: JSON array of catalog products (default: bundled catalog)
//! - `MAX_BODY_BYTES`: Request body limit in bytes (default: 65536)
//! - `ALLOWED_ORIGINS`: Comma-separated CORS origins (default: any origin)

use serde::Deserialize;
use std::path::PathBuf;

/// Complete server configuration loaded from environment.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Serviceable pincode dataset; `None` uses the bundled list
    pub serviceable_pincodes_path: Option<PathBuf>,

    /// Product catalog; `None` uses the bundled catalog
    pub products_path: Option<PathBuf>,

    /// Maximum accepted request body size
    pub max_body_bytes: usize,

    /// CORS origins; empty allows any origin
    pub allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            serviceable_pincodes_path: None,
            products_path: None,
            max_body_bytes: 64 * 1024,
            allowed_origins: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed to the expected type.
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            host: env_or("HOST", defaults.host)?,
            port: env_or("PORT", defaults.port)?,
            serviceable_pincodes_path: env_optional("SERVICEABLE_PINCODES_PATH").map(PathBuf::from),
            products_path: env_optional("PRODUCTS_PATH").map(PathBuf::from),
            max_body_bytes: env_or("MAX_BODY_BYTES", defaults.max_body_bytes)?,
            allowed_origins: env_optional("ALLOWED_ORIGINS")
                .map(|raw| parse_list(&raw))
                .unwrap_or_default(),
        })
    }
}

/// Load an optional environment variable, treating an empty value as unset.
fn env_optional(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Load an environment variable with a default value.
///
/// # Errors
///
/// Returns an error if the variable is set but cannot be parsed.
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}
