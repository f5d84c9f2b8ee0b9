// CryptoPad Settings Module
// User preferences persisted as TOML (default: ~/.config/cryptopad/settings.toml)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::mode::Mode;

/// Persisted user preferences.
///
/// The transform engine never reads these; they configure the front ends
/// (default mode, auto-save behavior, appearance). Unknown keys in the
/// file are ignored so older builds can read newer files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Color theme: "dark", "light" or "system"
    pub theme: String,

    /// Font size hint: "small", "medium" or "large"
    pub font_size: String,

    /// Mode selected when the app starts
    pub default_mode: Mode,

    /// Write output to an auto-save file after a quiet period
    pub auto_save: bool,

    /// Directory for saved output and the auto-save file
    pub save_location: PathBuf,

    /// Ask before quitting the TUI
    pub confirm_before_close: bool,

    /// Path the settings were loaded from (for save/reload)
    #[serde(skip)]
    source_path: Option<PathBuf>,
}

/// Errors that can occur when loading or saving settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(String),
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            font_size: "medium".to_string(),
            default_mode: Mode::Base64Encode,
            auto_save: false,
            save_location: default_save_location(),
            confirm_before_close: true,
            source_path: None,
        }
    }
}

impl Settings {
    /// Load settings from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(&path)?;
        let mut settings = Self::from_toml(&content)?;
        settings.source_path = Some(path.as_ref().to_path_buf());
        Ok(settings)
    }

    /// Load settings from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        toml::from_str(content).map_err(|e| SettingsError::TomlParse(e.to_string()))
    }

    /// Get the default settings path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("cryptopad").join("settings.toml"))
    }

    /// Load from the default location, falling back to defaults when the
    /// file does not exist yet
    pub fn load_default() -> Result<Self, SettingsError> {
        if let Some(path) = Self::default_path() {
            if path.exists() {
                return Self::from_file(path);
            }
        }
        Ok(Self::default())
    }

    /// Write settings to a file atomically (temp file + rename)
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<(), SettingsError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let rendered =
            toml::to_string_pretty(self).map_err(|e| SettingsError::TomlSerialize(e.to_string()))?;
        let temp = path.with_extension("toml.tmp");
        std::fs::write(&temp, rendered)?;
        std::fs::rename(&temp, path)?;
        log::debug!("settings saved to {}", path.display());
        Ok(())
    }

    /// Save to the source path if known, otherwise the default location
    pub fn save(&self) -> Result<(), SettingsError> {
        let path = self
            .source_path
            .clone()
            .or_else(Settings::default_path)
            .ok_or_else(|| {
                SettingsError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "no settings path available",
                ))
            })?;
        self.save_to(path)
    }

    /// Restore defaults, keeping the source path for a later save
    pub fn reset(&mut self) {
        let source_path = self.source_path.take();
        *self = Self::default();
        self.source_path = source_path;
    }

    /// Cycle through the supported themes
    pub fn cycle_theme(&mut self) {
        self.theme = match self.theme.to_ascii_lowercase().as_str() {
            "dark" => "light".to_string(),
            "light" => "system".to_string(),
            _ => "dark".to_string(),
        };
    }

    /// Cycle through the supported font sizes
    pub fn cycle_font_size(&mut self) {
        self.font_size = match self.font_size.to_ascii_lowercase().as_str() {
            "small" => "medium".to_string(),
            "medium" => "large".to_string(),
            _ => "small".to_string(),
        };
    }
}

fn default_save_location() -> PathBuf {
    dirs::document_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.theme, "dark");
        assert_eq!(settings.font_size, "medium");
        assert_eq!(settings.default_mode, Mode::Base64Encode);
        assert!(!settings.auto_save);
        assert!(settings.confirm_before_close);
    }

    #[test]
    fn test_settings_from_toml() {
        let toml = r#"
theme = "light"
default_mode = "encrypt"
auto_save = true
"#;
        let settings = Settings::from_toml(toml).unwrap();
        assert_eq!(settings.theme, "light");
        assert_eq!(settings.default_mode, Mode::Encrypt);
        assert!(settings.auto_save);
        // Unspecified fields keep their defaults
        assert_eq!(settings.font_size, "medium");
        assert!(settings.confirm_before_close);
    }

    #[test]
    fn test_settings_toml_round_trip() {
        let mut settings = Settings::default();
        settings.default_mode = Mode::Decrypt;
        settings.auto_save = true;
        settings.save_location = PathBuf::from("/tmp/cryptopad-test");

        let rendered = toml::to_string_pretty(&settings).unwrap();
        let parsed = Settings::from_toml(&rendered).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_settings_ignores_unknown_keys() {
        let toml = r#"
theme = "dark"
some_future_key = 42
"#;
        assert!(Settings::from_toml(toml).is_ok());
    }

    #[test]
    fn test_settings_rejects_bad_mode() {
        let toml = r#"default_mode = "rot13""#;
        assert!(matches!(
            Settings::from_toml(toml),
            Err(SettingsError::TomlParse(_))
        ));
    }

    #[test]
    fn test_cycle_theme() {
        let mut settings = Settings::default();
        settings.cycle_theme();
        assert_eq!(settings.theme, "light");
        settings.cycle_theme();
        assert_eq!(settings.theme, "system");
        settings.cycle_theme();
        assert_eq!(settings.theme, "dark");
    }

    #[test]
    fn test_unrecognized_theme_cycles_back_to_dark() {
        let mut settings = Settings::default();
        settings.theme = "solarized".to_string();
        settings.cycle_theme();
        assert_eq!(settings.theme, "dark");
    }

    #[test]
    fn test_cycle_font_size() {
        let mut settings = Settings::default();
        settings.cycle_font_size();
        assert_eq!(settings.font_size, "large");
        settings.cycle_font_size();
        assert_eq!(settings.font_size, "small");
        settings.cycle_font_size();
        assert_eq!(settings.font_size, "medium");
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut settings = Settings::default();
        settings.theme = "light".to_string();
        settings.auto_save = true;
        settings.reset();
        assert_eq!(settings, Settings::default());
    }
}
