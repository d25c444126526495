//! Admin configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! - `WARUNG_DATA_DIR` - Directory for the key-value store (default:
//!   `warung-data`). Must point at the same directory as the storefront;
//!   the shared store *is* the channel between the two sides.

use std::path::PathBuf;

/// Default data directory, shared with the storefront.
pub const DEFAULT_DATA_DIR: &str = "warung-data";

/// Admin application configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Directory holding the key-value store.
    pub data_dir: PathBuf,
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    #[must_use]
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        Self {
            data_dir: std::env::var("WARUNG_DATA_DIR")
                .map_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from),
        }
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}
