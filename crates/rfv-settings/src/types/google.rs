//! Google API and calendar settings.

use serde::{Deserialize, Serialize};

/// Google credentials and API endpoints.
///
/// Base URLs are configurable so tests can point the clients at a mock server.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GoogleSettings {
    /// API key used for Calendar reads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Inline service-account key JSON.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_account_info: Option<String>,
    /// Path to a service-account key file. Used when no inline key is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_account_file: Option<String>,
    /// Docs API base URL.
    pub docs_base_url: String,
    /// Drive API base URL.
    pub drive_base_url: String,
    /// Calendar API base URL.
    pub calendar_base_url: String,
    /// OAuth token endpoint override. Defaults to the key's `token_uri`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_url: Option<String>,
}

impl Default for GoogleSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            service_account_info: None,
            service_account_file: None,
            docs_base_url: "https://docs.googleapis.com".to_string(),
            drive_base_url: "https://www.googleapis.com".to_string(),
            calendar_base_url: "https://www.googleapis.com".to_string(),
            token_url: None,
        }
    }
}

/// Calendar lookup settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalendarSettings {
    /// Fallback calendar id when the campaign file has none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar_id: Option<String>,
    /// Shared campaign YAML file, re-read on every lookup.
    pub campaign_file: String,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            calendar_id: None,
            campaign_file: "campaign.yml".to_string(),
        }
    }
}
