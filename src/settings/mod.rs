// src/settings/mod.rs
pub mod io;

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::tables::ExportFormat;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    pub default_export_format: ExportFormat,
    /// Seconds a transient notification stays visible.
    pub notification_seconds: f32,
    /// Pad short recognizer rows instead of refusing the document.
    pub pad_ragged_rows: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            default_export_format: ExportFormat::Tsv,
            notification_seconds: 2.0,
            pad_ragged_rows: true,
        }
    }
}

impl AppSettings {
    pub fn notification_duration(&self) -> Duration {
        Duration::try_from_secs_f32(self.notification_seconds)
            .unwrap_or(crate::ui::DEFAULT_NOTIFICATION_DURATION)
    }
}

#[cfg(test)]
mod tests {
    use super::io::{load_settings_from, save_settings_to, SettingsError};
    use super::*;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    fn settings_file() -> (TempDir, std::path::PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app_settings.json");
        (dir, path)
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let (_dir, path) = settings_file();
        let settings: AppSettings = load_settings_from(&path).unwrap();
        assert_eq!(settings, AppSettings::default());
        assert_eq!(settings.notification_duration(), Duration::from_secs(2));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let (_dir, path) = settings_file();
        fs::write(&path, r#"{ "default_export_format": "csv" }"#).unwrap();

        let settings: AppSettings = load_settings_from(&path).unwrap();
        assert_eq!(settings.default_export_format, ExportFormat::Csv);
        assert!(settings.pad_ragged_rows);
    }

    #[test]
    fn test_save_then_load() {
        let (_dir, path) = settings_file();
        let settings = AppSettings {
            default_export_format: ExportFormat::Csv,
            notification_seconds: 3.5,
            pad_ragged_rows: false,
        };
        save_settings_to(&settings, &path).unwrap();
        let loaded: AppSettings = load_settings_from(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let (_dir, path) = settings_file();
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            load_settings_from::<AppSettings>(&path),
            Err(SettingsError::Parse { .. })
        ));
    }

    #[test]
    fn test_negative_duration_falls_back() {
        let settings = AppSettings {
            notification_seconds: -1.0,
            ..AppSettings::default()
        };
        assert_eq!(settings.notification_duration(), Duration::from_secs(2));
    }
}
