use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::warn;

use crate::settings::Settings;

pub fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("word_hop");
    path.push("settings.json");
    path
}

/// Load settings, falling back to defaults when the file is missing or bad.
pub fn load_settings() -> Settings {
    let path = settings_path();
    if !path.exists() {
        return Settings::default();
    }

    match read_settings(&path) {
        Ok(settings) => settings,
        Err(e) => {
            warn!("ignoring settings file: {:#}", e);
            Settings::default()
        }
    }
}

pub fn read_settings(path: &Path) -> Result<Settings> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    write_settings(&settings_path(), settings)
}

pub fn write_settings(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read_back() {
        let dir = std::env::temp_dir().join(format!("word_hop_settings_{}", std::process::id()));
        let path = dir.join("settings.json");

        let mut settings = Settings::default();
        settings.oracle.model = "local-model".into();
        settings.game.seed_attempts = 5;

        write_settings(&path, &settings).unwrap();
        assert_eq!(read_settings(&path).unwrap(), settings);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn unreadable_json_is_an_error() {
        let dir = std::env::temp_dir().join(format!("word_hop_bad_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(read_settings(&path).is_err());

        fs::remove_dir_all(&dir).ok();
    }
}
