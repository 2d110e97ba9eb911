//! Configuration management for edudesk.
//!
//! This module handles loading and saving configuration from `~/.edudesk/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ChatConfig, ColorSetting, Config, FocusConfig, GeneralConfig};
