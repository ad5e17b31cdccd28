use crate::error::{Result, StandupError};
use crate::export::ExportFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const SETTINGS_FILENAME: &str = "settings.json";

pub const KEY_COPY_PREVIOUS: &str = "copy-previous";
pub const KEY_EXPORT_FORMAT: &str = "export-format";

/// User settings, stored in `settings.json` next to the entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Seed a new entry's "Previously" with the last entry's "Today"
    #[serde(default = "default_copy_previous")]
    pub copy_previous_entry: bool,

    #[serde(default)]
    pub export_format: ExportFormat,
}

fn default_copy_previous() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            copy_previous_entry: default_copy_previous(),
            export_format: ExportFormat::default(),
        }
    }
}

/// Partial update: only the `Some` fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsPatch {
    pub copy_previous_entry: Option<bool>,
    pub export_format: Option<ExportFormat>,
}

impl Settings {
    /// Load settings from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let path = dir.as_ref().join(SETTINGS_FILENAME);

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(StandupError::Io)?;
        let settings: Settings =
            serde_json::from_str(&content).map_err(StandupError::Serialization)?;
        Ok(settings)
    }

    pub fn save<P: AsRef<Path>>(&self, dir: P) -> Result<()> {
        let dir = dir.as_ref();

        if !dir.exists() {
            fs::create_dir_all(dir).map_err(StandupError::Io)?;
        }

        let path = dir.join(SETTINGS_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(StandupError::Serialization)?;
        fs::write(path, content).map_err(StandupError::Io)?;
        Ok(())
    }

    pub fn apply(&mut self, patch: SettingsPatch) {
        if let Some(copy) = patch.copy_previous_entry {
            self.copy_previous_entry = copy;
        }
        if let Some(format) = patch.export_format {
            self.export_format = format;
        }
    }

    pub fn keys() -> &'static [&'static str] {
        &[KEY_COPY_PREVIOUS, KEY_EXPORT_FORMAT]
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            KEY_COPY_PREVIOUS => Some(self.copy_previous_entry.to_string()),
            KEY_EXPORT_FORMAT => Some(self.export_format.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        let patch = match key {
            KEY_COPY_PREVIOUS => SettingsPatch {
                copy_previous_entry: Some(parse_bool(value)?),
                ..Default::default()
            },
            KEY_EXPORT_FORMAT => SettingsPatch {
                export_format: Some(value.parse()?),
                ..Default::default()
            },
            other => return Err(format!("Unknown config key: {}", other)),
        };
        self.apply(patch);
        Ok(())
    }
}

fn parse_bool(value: &str) -> std::result::Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        other => Err(format!("Expected true or false, got: {}", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(settings.copy_previous_entry);
        assert_eq!(settings.export_format, ExportFormat::Plain);
    }

    #[test]
    fn test_load_missing_settings() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(dir.path()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("data");

        let mut settings = Settings::default();
        settings.set(KEY_EXPORT_FORMAT, "markdown").unwrap();
        settings.save(&nested).unwrap();

        let loaded = Settings::load(&nested).unwrap();
        assert_eq!(loaded.export_format, ExportFormat::Markdown);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(SETTINGS_FILENAME),
            r#"{"exportFormat": "slack-default"}"#,
        )
        .unwrap();

        let settings = Settings::load(dir.path()).unwrap();
        assert!(settings.copy_previous_entry);
        assert_eq!(settings.export_format, ExportFormat::Plain);
    }

    #[test]
    fn test_patch_only_touches_given_fields() {
        let mut settings = Settings::default();
        settings.apply(SettingsPatch {
            copy_previous_entry: Some(false),
            export_format: None,
        });
        assert!(!settings.copy_previous_entry);
        assert_eq!(settings.export_format, ExportFormat::Plain);
    }

    #[test]
    fn test_get_and_set_by_key() {
        let mut settings = Settings::default();
        settings.set(KEY_COPY_PREVIOUS, "off").unwrap();
        assert_eq!(settings.get(KEY_COPY_PREVIOUS).as_deref(), Some("false"));
        assert!(settings.set(KEY_COPY_PREVIOUS, "maybe").is_err());
        assert!(settings.set("colour", "red").is_err());
        assert_eq!(settings.get("colour"), None);
    }

    #[test]
    fn test_serialization_uses_camel_case() {
        let json = serde_json::to_value(Settings::default()).unwrap();
        assert_eq!(json["copyPreviousEntry"], true);
        assert_eq!(json["exportFormat"], "plain");
    }
}
