//! Settings type definitions.
//!
//! All types use `#[serde(rename_all = "camelCase")]` and implement
//! [`Default`] with production values. Types marked with `#[serde(default)]`
//! accept partial JSON; missing fields get their default value.

mod google;
mod server;

pub use google::*;
pub use server::*;

use serde::{Deserialize, Serialize};

/// Root settings type for the RollForVibes services.
///
/// Loaded from `~/.rollforvibes/settings.json` with defaults applied for
/// missing fields. Environment variables override specific values.
///
/// ```json
/// {
///   "server": { "port": 8001 },
///   "calendar": { "campaignFile": "/srv/campaign.yml" }
/// }
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RfvSettings {
    /// Settings schema version.
    pub version: String,
    /// Application name.
    pub name: String,
    /// HTTP listener settings.
    pub server: ServerSettings,
    /// Relational store settings.
    pub database: DatabaseSettings,
    /// Logging configuration.
    pub logging: LoggingSettings,
    /// Google API credentials and endpoints.
    pub google: GoogleSettings,
    /// Calendar lookup settings.
    pub calendar: CalendarSettings,
}

impl Default for RfvSettings {
    fn default() -> Self {
        Self {
            version: "0.1.0".to_string(),
            name: "rollforvibes".to_string(),
            server: ServerSettings::default(),
            database: DatabaseSettings::default(),
            logging: LoggingSettings::default(),
            google: GoogleSettings::default(),
            calendar: CalendarSettings::default(),
        }
    }
}
