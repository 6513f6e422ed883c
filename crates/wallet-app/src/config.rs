//! Application configuration.

use std::path::PathBuf;
use wallet_client::RestClient;

/// Configuration for [`crate::AppCore`].
///
/// Two knobs: the backend base URL and the directory the session record is
/// persisted in.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the Social Wallet backend.
    pub api_base_url: String,
    /// Directory holding the persisted session record.
    pub storage_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        let storage_dir = dirs::data_local_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("social-wallet");
        Self {
            api_base_url: RestClient::DEFAULT_BASE_URL.to_string(),
            storage_dir,
        }
    }
}

impl AppConfig {
    /// Configuration against a non-default backend, keeping the default
    /// storage location.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
            ..Self::default()
        }
    }
}
