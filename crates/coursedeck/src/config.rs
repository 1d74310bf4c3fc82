use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::theme::ThemePreference;

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "coursedeck";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// The one persisted presentation preference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemePreference>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_mode: Option<String>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("No config found. Run `coursedeck config show` to see defaults.")
            } else {
                anyhow::anyhow!("Failed to read config: {e}")
            }
        })?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let contents = format!("# Coursedeck configuration\n{yaml}");
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "theme" => {
                let Some(pref) = ThemePreference::from_name(value) else {
                    anyhow::bail!("Invalid theme: {value}. Must be 'dark', 'light', or 'system'.");
                };
                self.theme = Some(pref);
            }
            "start_mode" => {
                if value != "first" && value.parse::<usize>().is_err() {
                    anyhow::bail!(
                        "Invalid start_mode: {value}. Must be 'first' or a slide number."
                    );
                }
                self.start_mode = Some(value.to_string());
            }
            _ => anyhow::bail!("Unknown config key: {key}. Valid keys: theme, start_mode"),
        }
        Ok(())
    }

    /// Persist a theme preference without disturbing other keys.
    pub fn save_theme(pref: ThemePreference) -> Result<PathBuf> {
        let mut config = Self::load_or_default();
        config.theme = Some(pref);
        config.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_theme_accepts_known_values() {
        let mut config = Config::default();
        for value in ["dark", "light", "system"] {
            config.set("theme", value).unwrap();
            assert_eq!(config.theme.map(|p| p.name()), Some(value));
        }
    }

    #[test]
    fn set_theme_rejects_unknown_value() {
        let mut config = Config::default();
        assert!(config.set("theme", "sepia").is_err());
        assert!(config.theme.is_none());
    }

    #[test]
    fn set_start_mode_validates() {
        let mut config = Config::default();
        config.set("start_mode", "first").unwrap();
        config.set("start_mode", "3").unwrap();
        assert!(config.set("start_mode", "overview").is_err());
    }

    #[test]
    fn set_unknown_key_is_an_error() {
        let mut config = Config::default();
        assert!(config.set("defaults.theme", "dark").is_err());
    }

    #[test]
    fn theme_round_trips_through_yaml() {
        let mut config = Config::default();
        config.theme = Some(ThemePreference::Dark);
        let yaml = serde_yaml::to_string(&config).unwrap();
        let back: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back.theme, Some(ThemePreference::Dark));
    }

    #[test]
    fn load_missing_file_is_an_error_but_default_fallback_works() {
        let missing = Path::new("/nonexistent/coursedeck/config.yaml");
        assert!(Config::load_from(missing).is_err());
    }
}
