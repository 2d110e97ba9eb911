//! Configuration settings for edudesk.
//!
//! Settings are loaded from `~/.edudesk/config.yaml`. Every field has a
//! default, so a partial file is fine.

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::config::Paths;
use crate::error::EdudeskError;
use crate::features::chat::Role;
use crate::features::focus::TimerSettings;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Focus timer settings.
    pub focus: FocusConfig,
    /// Chat settings.
    pub chat: ChatConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

/// Focus timer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FocusConfig {
    /// Focus interval length in minutes.
    #[serde(default = "default_focus_minutes")]
    pub focus_minutes: u32,
    /// Break interval length in minutes.
    #[serde(default = "default_break_minutes")]
    pub break_minutes: u32,
}

/// Chat settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ChatConfig {
    /// Role assumed for `chat send` when `--role` is omitted.
    pub default_role: Role,
}

const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

const fn default_focus_minutes() -> u32 {
    25
}

const fn default_break_minutes() -> u32 {
    5
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
        }
    }
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            focus_minutes: default_focus_minutes(),
            break_minutes: default_break_minutes(),
        }
    }
}

impl FocusConfig {
    /// Interval lengths for the timer.
    #[must_use]
    pub const fn timer_settings(&self) -> TimerSettings {
        TimerSettings {
            focus_minutes: self.focus_minutes,
            break_minutes: self.break_minutes,
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, EdudeskError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed or
    /// holds an invalid value.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, EdudeskError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            EdudeskError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        let config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            EdudeskError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns `EdudeskError::Config` if an interval length is zero.
    pub fn validate(&self) -> Result<(), EdudeskError> {
        if self.focus.focus_minutes == 0 || self.focus.break_minutes == 0 {
            return Err(EdudeskError::Config(
                "focus.focus_minutes and focus.break_minutes must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Save configuration to the default path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save(&self) -> Result<(), EdudeskError> {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;
        self.save_to_path(&paths.config_file)
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), EdudeskError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| EdudeskError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            EdudeskError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }
}
