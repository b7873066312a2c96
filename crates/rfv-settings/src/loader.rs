//! Settings loading with deep merge and environment variable overrides.
//!
//! Loading flow:
//! 1. Start with compiled [`RfvSettings::default()`]
//! 2. If the settings file exists, deep-merge user values over defaults
//! 3. Apply environment variable overrides (highest priority)
//!
//! Deep merge rules:
//! - Objects are merged recursively (source overrides target per-key)
//! - Arrays and primitives are replaced entirely by source
//! - Null values in source are skipped (preserving target)

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::Result;
use crate::types::RfvSettings;

/// Data directory (`~/.rollforvibes`).
pub fn rfv_home() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    PathBuf::from(home).join(".rollforvibes")
}

/// Resolve the path to the settings file (`~/.rollforvibes/settings.json`).
pub fn settings_path() -> PathBuf {
    rfv_home().join("settings.json")
}

/// Load settings from the default path with env var overrides.
pub fn load_settings() -> Result<RfvSettings> {
    load_settings_from_path(&settings_path())
}

/// Load settings from a specific path with env var overrides.
///
/// If the file does not exist, returns defaults. If the file contains
/// invalid JSON, returns an error.
pub fn load_settings_from_path(path: &Path) -> Result<RfvSettings> {
    let mut settings = load_file_layer(path)?;
    apply_env_overrides(&mut settings);
    Ok(settings)
}

/// Defaults merged with the settings file, without env overrides.
fn load_file_layer(path: &Path) -> Result<RfvSettings> {
    let defaults = serde_json::to_value(RfvSettings::default())?;

    let merged = if path.exists() {
        debug!(?path, "loading settings from file");
        let content = std::fs::read_to_string(path)?;
        let user: Value = serde_json::from_str(&content)?;
        deep_merge(defaults, user)
    } else {
        debug!(?path, "settings file not found, using defaults");
        defaults
    };

    Ok(serde_json::from_value(merged)?)
}

/// Recursive deep merge of two JSON values.
pub fn deep_merge(target: Value, source: Value) -> Value {
    match (target, source) {
        (Value::Object(mut target_map), Value::Object(source_map)) => {
            for (key, source_val) in source_map {
                if source_val.is_null() {
                    continue;
                }
                let merged = if let Some(target_val) = target_map.remove(&key) {
                    deep_merge(target_val, source_val)
                } else {
                    source_val
                };
                let _ = target_map.insert(key, merged);
            }
            Value::Object(target_map)
        }
        (_, source) => source,
    }
}

/// Apply process environment overrides to loaded settings.
pub fn apply_env_overrides(settings: &mut RfvSettings) {
    apply_overrides(settings, |name| std::env::var(name).ok());
}

/// Apply overrides from an arbitrary variable source.
///
/// Empty values are ignored. Values that fail to parse are ignored with a
/// warning, keeping the file/default value.
pub fn apply_overrides<F>(settings: &mut RfvSettings, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let get = |name: &str| lookup(name).filter(|v| !v.is_empty());

    // ── Server ──────────────────────────────────────────────────────
    if let Some(v) = get("PORT") {
        match parse_u16_range(&v, 1, 65535) {
            Some(port) => settings.server.port = port,
            None => warn!(key = "PORT", value = %v, "invalid port env var, ignoring"),
        }
    }
    if let Some(v) = get("RFV_HOST") {
        settings.server.host = v;
    }

    // ── Database ────────────────────────────────────────────────────
    if let Some(v) = get("RFV_DB_PATH") {
        settings.database.path = Some(v);
    }

    // ── Logging ─────────────────────────────────────────────────────
    if let Some(v) = get("RFV_LOG_LEVEL") {
        match parse_enum(&v) {
            Some(level) => settings.logging.level = level,
            None => warn!(key = "RFV_LOG_LEVEL", value = %v, "invalid log level, ignoring"),
        }
    }
    if let Some(v) = get("RFV_LOG_FORMAT") {
        match parse_enum(&v) {
            Some(format) => settings.logging.format = format,
            None => warn!(key = "RFV_LOG_FORMAT", value = %v, "invalid log format, ignoring"),
        }
    }

    // ── Google ──────────────────────────────────────────────────────
    if let Some(v) = get("GOOGLE_API_KEY") {
        settings.google.api_key = Some(v);
    }
    if let Some(v) = get("GOOGLE_SERVICE_ACCOUNT_INFO") {
        settings.google.service_account_info = Some(v);
    }
    if let Some(v) = get("GOOGLE_SERVICE_ACCOUNT_FILE") {
        settings.google.service_account_file = Some(v);
    }

    // ── Calendar ────────────────────────────────────────────────────
    if let Some(v) = get("GOOGLE_CALENDAR_ID") {
        settings.calendar.calendar_id = Some(v);
    }
    if let Some(v) = get("RFV_CAMPAIGN_FILE") {
        settings.calendar.campaign_file = v;
    }
}

// ── Pure parsing functions (testable without env vars) ──────────────────────

/// Parse a string as a `u16` within a range.
pub fn parse_u16_range(val: &str, min: u16, max: u16) -> Option<u16> {
    let n: u16 = val.trim().parse().ok()?;
    (n >= min && n <= max).then_some(n)
}

/// Parse a lowercase serde tag into a unit enum (`"debug"`, `"json"`).
fn parse_enum<T: serde::de::DeserializeOwned>(val: &str) -> Option<T> {
    serde_json::from_value(Value::String(val.trim().to_lowercase())).ok()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::errors::SettingsError;
    use crate::types::{LogFormat, LogLevel};

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    fn apply(settings: &mut RfvSettings, pairs: &[(&str, &str)]) {
        let env = vars(pairs);
        apply_overrides(settings, |name| env.get(name).cloned());
    }

    // ── deep_merge ──────────────────────────────────────────────────

    #[test]
    fn merge_nested_override() {
        let target = serde_json::json!({"server": {"port": 8000, "host": "0.0.0.0"}});
        let source = serde_json::json!({"server": {"port": 9000}});
        let merged = deep_merge(target, source);
        assert_eq!(merged["server"]["port"], 9000);
        assert_eq!(merged["server"]["host"], "0.0.0.0");
    }

    #[test]
    fn merge_null_preserves_target() {
        let target = serde_json::json!({"a": 1, "b": 2});
        let source = serde_json::json!({"a": null});
        let merged = deep_merge(target, source);
        assert_eq!(merged["a"], 1);
        assert_eq!(merged["b"], 2);
    }

    #[test]
    fn merge_array_replace() {
        let target = serde_json::json!({"items": [1, 2, 3]});
        let source = serde_json::json!({"items": [4]});
        assert_eq!(deep_merge(target, source)["items"], serde_json::json!([4]));
    }

    #[test]
    fn merge_primitive_replaces_object() {
        let target = serde_json::json!({"a": {"nested": true}});
        let source = serde_json::json!({"a": 42});
        assert_eq!(deep_merge(target, source)["a"], 42);
    }

    #[test]
    fn merge_new_keys_added() {
        let merged = deep_merge(serde_json::json!({"a": 1}), serde_json::json!({"b": 2}));
        assert_eq!(merged["a"], 1);
        assert_eq!(merged["b"], 2);
    }

    // ── file layer ──────────────────────────────────────────────────

    #[test]
    fn missing_file_returns_defaults() {
        let settings = load_file_layer(Path::new("/nonexistent/settings.json")).unwrap();
        assert_eq!(settings.server.port, 8000);
        assert_eq!(settings.name, "rollforvibes");
    }

    #[test]
    fn partial_file_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(
            &path,
            r#"{"database": {"poolSize": 4}, "logging": {"format": "json"}}"#,
        )
        .unwrap();

        let settings = load_file_layer(&path).unwrap();
        assert_eq!(settings.database.pool_size, 4);
        assert_eq!(settings.database.busy_timeout_ms, 30_000);
        assert_eq!(settings.logging.format, LogFormat::Json);
        assert_eq!(settings.logging.level, LogLevel::Info);
    }

    #[test]
    fn invalid_json_returns_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not valid json").unwrap();

        let result = load_file_layer(&path);
        assert!(matches!(result.unwrap_err(), SettingsError::Json(_)));
    }

    // ── overrides ───────────────────────────────────────────────────

    #[test]
    fn overrides_apply_over_file_values() {
        let mut settings = RfvSettings::default();
        settings.server.port = 9000;
        apply(
            &mut settings,
            &[
                ("PORT", "8003"),
                ("RFV_HOST", "127.0.0.1"),
                ("RFV_DB_PATH", "/tmp/rfv.db"),
                ("GOOGLE_API_KEY", "key-123"),
                ("GOOGLE_CALENDAR_ID", "cal@example.com"),
                ("GOOGLE_SERVICE_ACCOUNT_FILE", "/etc/rfv/sa.json"),
                ("RFV_CAMPAIGN_FILE", "/srv/campaign.yml"),
            ],
        );
        assert_eq!(settings.server.port, 8003);
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.database.path.as_deref(), Some("/tmp/rfv.db"));
        assert_eq!(settings.google.api_key.as_deref(), Some("key-123"));
        assert_eq!(
            settings.calendar.calendar_id.as_deref(),
            Some("cal@example.com")
        );
        assert_eq!(
            settings.google.service_account_file.as_deref(),
            Some("/etc/rfv/sa.json")
        );
        assert_eq!(settings.calendar.campaign_file, "/srv/campaign.yml");
    }

    #[test]
    fn invalid_override_values_are_ignored() {
        let mut settings = RfvSettings::default();
        apply(
            &mut settings,
            &[
                ("PORT", "http"),
                ("RFV_LOG_LEVEL", "loud"),
                ("RFV_LOG_FORMAT", "xml"),
            ],
        );
        assert_eq!(settings.server.port, 8000);
        assert_eq!(settings.logging.level, LogLevel::Info);
        assert_eq!(settings.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn empty_override_values_are_ignored() {
        let mut settings = RfvSettings::default();
        settings.google.api_key = Some("from-file".to_string());
        apply(&mut settings, &[("GOOGLE_API_KEY", ""), ("RFV_HOST", "")]);
        assert_eq!(settings.google.api_key.as_deref(), Some("from-file"));
        assert_eq!(settings.server.host, "0.0.0.0");
    }

    #[test]
    fn log_overrides_are_case_insensitive() {
        let mut settings = RfvSettings::default();
        apply(
            &mut settings,
            &[("RFV_LOG_LEVEL", "DEBUG"), ("RFV_LOG_FORMAT", "Json")],
        );
        assert_eq!(settings.logging.level, LogLevel::Debug);
        assert_eq!(settings.logging.format, LogFormat::Json);
    }

    // ── parse_u16_range ─────────────────────────────────────────────

    #[test]
    fn parse_u16_valid() {
        assert_eq!(parse_u16_range("8000", 1, 65535), Some(8000));
        assert_eq!(parse_u16_range(" 8001 ", 1, 65535), Some(8001));
        assert_eq!(parse_u16_range("65535", 1, 65535), Some(65535));
    }

    #[test]
    fn parse_u16_invalid() {
        assert_eq!(parse_u16_range("0", 1, 65535), None);
        assert_eq!(parse_u16_range("99999", 1, 65535), None);
        assert_eq!(parse_u16_range("", 1, 65535), None);
    }
}
