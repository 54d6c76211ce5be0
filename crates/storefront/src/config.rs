//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `THREADLOOM_CATALOG_PATH` - Path to the JSON catalog data file
//!
//! ## Optional
//! - `THREADLOOM_CART_PATH` - Cart state file (default: `cart.json`)
//! - `THREADLOOM_PAGE_SIZE` - Listing page size; must be one of the
//!   supported sizes (default: 12)

use std::path::PathBuf;

use thiserror::Error;

use crate::pagination::PageSize;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Path to the JSON catalog data file.
    pub catalog_path: PathBuf,
    /// Path to the persisted cart state file.
    pub cart_path: PathBuf,
    /// Listing page size.
    pub page_size: PageSize,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or a
    /// value is out of range.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let catalog_path = PathBuf::from(get_required_env("THREADLOOM_CATALOG_PATH")?);
        let cart_path = PathBuf::from(get_env_or_default("THREADLOOM_CART_PATH", "cart.json"));
        let page_size = parse_page_size("THREADLOOM_PAGE_SIZE")?;

        Ok(Self {
            catalog_path,
            cart_path,
            page_size,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse an optional page-size variable against the supported set.
fn parse_page_size(key: &str) -> Result<PageSize, ConfigError> {
    let Ok(raw) = std::env::var(key) else {
        return Ok(PageSize::default());
    };

    parse_page_size_value(&raw).map_err(|reason| ConfigError::InvalidEnvVar(key.to_string(), reason))
}

/// Validate a raw page-size string against the supported set.
fn parse_page_size_value(raw: &str) -> Result<PageSize, String> {
    let items: usize = raw.parse().map_err(|_| format!("not a number: {raw}"))?;

    PageSize::from_items(items).ok_or_else(|| {
        let supported: Vec<String> = PageSize::ALL.iter().map(ToString::to_string).collect();
        format!("{items} is not a supported page size ({})", supported.join(", "))
    })
}
