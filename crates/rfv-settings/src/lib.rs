//! # rfv-settings
//!
//! Configuration for the RollForVibes services, loaded from three layers
//! (in priority order):
//! 1. **Compiled defaults**: [`RfvSettings::default()`]
//! 2. **Settings file**: `~/.rollforvibes/settings.json` (deep-merged over defaults)
//! 3. **Environment variables**: `PORT`, `RFV_*` and `GOOGLE_*` overrides
//!
//! Credentials and calendar identifiers are never validated at load time.
//! Services check for them when a request needs them.

#![deny(unsafe_code)]

pub mod campaign;
pub mod errors;
pub mod loader;
pub mod types;

pub use errors::{Result, SettingsError};
pub use loader::{
    apply_env_overrides, deep_merge, load_settings, load_settings_from_path, rfv_home,
    settings_path,
};
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn re_exports_work() {
        let _settings = RfvSettings::default();
        let _path = settings_path();
    }

    #[test]
    fn default_settings_are_sane() {
        let settings = RfvSettings::default();
        assert_eq!(settings.name, "rollforvibes");
        assert_eq!(settings.server.port, 8000);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.database.pool_size, 16);
        assert!(settings.google.api_key.is_none());
        assert!(settings.calendar.calendar_id.is_none());
    }
}
