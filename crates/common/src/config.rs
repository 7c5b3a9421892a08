//! Application configuration and monitor presets.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Global application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base directory where session capture folders are created.
    pub output_dir: PathBuf,

    /// Default capture settings.
    pub capture: CaptureDefaults,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Default capture parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureDefaults {
    /// Seconds between capture ticks.
    pub interval_secs: u64,

    /// Monitor selection spec ("all", "primary", or a comma list like "1,2").
    pub monitors: String,

    /// How many captures to sample into a review.
    pub sample_count: usize,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "tasklens=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path.
    pub file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("task_captures"),
            capture: CaptureDefaults::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for CaptureDefaults {
    fn default() -> Self {
        Self {
            interval_secs: 30,
            monitors: "all".to_string(),
            sample_count: 5,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        let config_path = config_file_path();
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {:?}: {}", config_path, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {:?}: {}", config_path, e);
                }
            }
        }
        Self::default()
    }

    /// Save config to the standard location.
    pub fn save(&self) -> Result<(), std::io::Error> {
        let config_path = config_file_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(config_path, json)
    }
}

/// A single saved monitor preset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorPreset {
    /// Monitor selection spec ("all", "primary", or a comma list like "1,2").
    pub monitors: String,

    /// Free-form note about the preset.
    #[serde(default)]
    pub description: String,

    /// Local time the preset was saved, `YYYY-MM-DD HH:MM:SS`.
    #[serde(default)]
    pub created: String,
}

/// Named monitor selection presets, stored beside the config file.
///
/// A preset pairs a short name ("coding", "meeting") with a monitor spec
/// and an optional description, so sessions can be started with
/// `--monitors` pointed at a preset value instead of retyping index lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonitorPresets {
    presets: BTreeMap<String, MonitorPreset>,
}

impl MonitorPresets {
    /// Load presets from the standard location, falling back to empty.
    pub fn load() -> Self {
        let path = presets_file_path();
        if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(presets) => return presets,
                    Err(e) => {
                        tracing::warn!("Failed to parse presets at {:?}: {}", path, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read presets at {:?}: {}", path, e);
                }
            }
        }
        Self::default()
    }

    /// Save presets to the standard location.
    pub fn save(&self) -> Result<(), std::io::Error> {
        let path = presets_file_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }

    /// Store or replace a preset, stamping its creation time.
    pub fn set(
        &mut self,
        name: impl Into<String>,
        spec: impl Into<String>,
        description: impl Into<String>,
    ) {
        self.presets.insert(
            name.into(),
            MonitorPreset {
                monitors: spec.into(),
                description: description.into(),
                created: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            },
        );
    }

    /// Look up a preset by name.
    pub fn get(&self, name: &str) -> Option<&MonitorPreset> {
        self.presets.get(name)
    }

    /// Preset spec for `name`, or "all" when the name is unknown.
    pub fn resolve(&self, name: &str) -> &str {
        self.get(name).map(|p| p.monitors.as_str()).unwrap_or("all")
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Iterate presets in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MonitorPreset)> {
        self.presets.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Standard config file location.
fn config_file_path() -> PathBuf {
    config_dir().join("config.json")
}

/// Standard presets file location.
fn presets_file_path() -> PathBuf {
    config_dir().join("monitor_presets.json")
}

fn config_dir() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("tasklens")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.capture.interval_secs, 30);
        assert_eq!(config.capture.monitors, "all");
        assert_eq!(config.capture.sample_count, 5);
        assert_eq!(config.output_dir, PathBuf::from("task_captures"));
    }

    #[test]
    fn test_preset_lookup_and_fallback() {
        let mut presets = MonitorPresets::default();
        assert!(presets.is_empty());
        presets.set("coding", "1,2", "");
        assert_eq!(presets.get("coding").map(|p| p.monitors.as_str()), Some("1,2"));
        assert_eq!(presets.resolve("coding"), "1,2");
        assert_eq!(presets.resolve("missing"), "all");
    }

    #[test]
    fn test_presets_iterate_in_name_order() {
        let mut presets = MonitorPresets::default();
        presets.set("zoom", "primary", "");
        presets.set("coding", "1,2", "");
        let names: Vec<&str> = presets.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["coding", "zoom"]);
    }

    #[test]
    fn test_preset_carries_description_and_creation_time() {
        let mut presets = MonitorPresets::default();
        presets.set("meeting", "primary", "Laptop screen only");

        let saved = presets.get("meeting").unwrap();
        assert_eq!(saved.description, "Laptop screen only");
        assert!(
            chrono::NaiveDateTime::parse_from_str(&saved.created, "%Y-%m-%d %H:%M:%S").is_ok()
        );

        let json = serde_json::to_string(&presets).unwrap();
        let reloaded: MonitorPresets = serde_json::from_str(&json).unwrap();
        let preset = reloaded.get("meeting").unwrap();
        assert_eq!(preset.monitors, "primary");
        assert_eq!(preset.description, "Laptop screen only");
        assert_eq!(preset.created, saved.created);
    }

    #[test]
    fn test_preset_entries_without_optional_fields_still_load() {
        let json = r#"{"presets":{"coding":{"monitors":"1,2"}}}"#;
        let presets: MonitorPresets = serde_json::from_str(json).unwrap();
        let preset = presets.get("coding").unwrap();
        assert_eq!(preset.monitors, "1,2");
        assert!(preset.description.is_empty());
        assert!(preset.created.is_empty());
    }
}
