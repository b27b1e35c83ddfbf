//! Provider-level account configuration

use serde::{Deserialize, Serialize};

/// Default account API endpoint
pub const DEFAULT_API_URL: &str = "https://api.strata.cloud";

/// Account API configuration supplied through the provider block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountConfig {
    /// Account API base URL
    pub api_url: String,

    /// Client id for the account API
    #[serde(default)]
    pub client_id: String,

    /// Client secret for the account API
    #[serde(default)]
    pub client_secret: String,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            client_id: String::new(),
            client_secret: String::new(),
        }
    }
}

impl AccountConfig {
    /// Whether account-level API credentials are configured.
    ///
    /// Resources check this before attempting any remote call.
    pub fn has_account_credentials(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.is_empty()
    }
}
