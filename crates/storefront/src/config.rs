//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `WARUNG_DATA_DIR` - Directory for the key-value store (default: `warung-data`)
//! - `WARUNG_STORE_NAME` - Shop display name (default: `Warung Kencana`)
//! - `WARUNG_WHATSAPP` - WhatsApp number for order confirmation messages

use std::path::PathBuf;

/// Default data directory, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = "warung-data";

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory holding the key-value store.
    pub data_dir: PathBuf,
    /// Shop display name, used on receipts.
    pub store_name: String,
    /// WhatsApp number customers confirm orders to, if configured.
    pub whatsapp_number: Option<String>,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    /// Every variable has a default, so loading cannot fail.
    #[must_use]
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        Self {
            data_dir: std::env::var("WARUNG_DATA_DIR")
                .map_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from),
            store_name: std::env::var("WARUNG_STORE_NAME")
                .unwrap_or_else(|_| "Warung Kencana".to_owned()),
            whatsapp_number: std::env::var("WARUNG_WHATSAPP").ok(),
        }
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            store_name: "Warung Kencana".to_owned(),
            whatsapp_number: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StorefrontConfig::default();
        assert_eq!(config.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
        assert_eq!(config.store_name, "Warung Kencana");
        assert!(config.whatsapp_number.is_none());
    }
}
