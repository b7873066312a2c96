//! Settings error types.

use thiserror::Error;

/// Errors that can occur when loading settings or the campaign file.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Failed to read a settings or campaign file from disk.
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    /// Failed to parse JSON in the settings file.
    #[error("failed to parse settings JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Failed to parse the campaign YAML file.
    #[error("failed to parse campaign YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for settings operations.
pub type Result<T> = std::result::Result<T, SettingsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_display() {
        let err = SettingsError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "not found",
        ));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn json_error_display() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err = SettingsError::Json(json_err);
        assert!(err.to_string().contains("parse settings JSON"));
    }

    #[test]
    fn yaml_error_from_conversion() {
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("a: [unclosed").unwrap_err();
        let err: SettingsError = yaml_err.into();
        assert!(matches!(err, SettingsError::Yaml(_)));
    }
}
