use common::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const SETTINGS_FILE_PATH: &str = "./settings.yaml";
pub const SETTINGS_PATH_ENV: &str = "WARDROBE_SETTINGS";

const DEFAULT_SKIN_TONE: [u8; 3] = [0xe0, 0xac, 0x69];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomizerSettings {
    /// Name of the category whose color drives the skin tone.
    pub skin_category: String,
    pub default_skin_tone: Color,
    pub idle_pose: String,
    pub export_file_name: String,
}

impl Default for CustomizerSettings {
    fn default() -> Self {
        Self {
            skin_category: "Head".to_string(),
            default_skin_tone: Color::from_rgb(DEFAULT_SKIN_TONE),
            idle_pose: "Idle".to_string(),
            export_file_name: "outfit.json".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsIoError {
    #[error("failed to read settings file: {0}")]
    Read(std::io::Error),
    #[error("failed to write settings file: {0}")]
    Write(std::io::Error),
    #[error("failed to decode YAML settings: {0}")]
    Deserialize(serde_yaml::Error),
    #[error("failed to encode YAML settings: {0}")]
    Serialize(serde_yaml::Error),
}

/// Settings file location, `WARDROBE_SETTINGS` when set.
pub fn settings_path() -> PathBuf {
    std::env::var_os(SETTINGS_PATH_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE_PATH))
}

pub fn load_settings_or_default(path: &Path) -> CustomizerSettings {
    if !path.exists() {
        return CustomizerSettings::default();
    }

    match load_settings_from_path(path) {
        Ok(settings) => settings,
        Err(error) => {
            log::warn!(
                "Failed to load settings from '{}': {}. Falling back to defaults.",
                path.display(),
                error
            );
            CustomizerSettings::default()
        }
    }
}

pub fn ensure_settings_file_exists(
    settings: &CustomizerSettings,
    path: &Path,
) -> Result<(), SettingsIoError> {
    if path.exists() {
        return Ok(());
    }

    write_settings_to_path(settings, path)
}

fn load_settings_from_path(path: &Path) -> Result<CustomizerSettings, SettingsIoError> {
    let raw = fs::read_to_string(path).map_err(SettingsIoError::Read)?;
    serde_yaml::from_str::<CustomizerSettings>(&raw).map_err(SettingsIoError::Deserialize)
}

fn write_settings_to_path(
    settings: &CustomizerSettings,
    path: &Path,
) -> Result<(), SettingsIoError> {
    let encoded = serde_yaml::to_string(settings).map_err(SettingsIoError::Serialize)?;
    fs::write(path, encoded).map_err(SettingsIoError::Write)
}
