//! Code for loading program settings.
use crate::input::read_toml;
use crate::log::DEFAULT_LOG_LEVEL;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

const SETTINGS_FILE_NAME: &str = "settings.toml";

/// The flat production cost per kg assumed when the settings file gives none
pub const DEFAULT_UNIT_COST: f64 = 0.30;

/// Default log level for program
fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

/// Default production cost per kg
fn default_unit_cost() -> f64 {
    DEFAULT_UNIT_COST
}

/// Program settings from config file
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// The default program log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Flat production cost in €/kg, applied to every crop
    #[serde(default = "default_unit_cost")]
    pub unit_cost_per_kg: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            log_level: default_log_level(),
            unit_cost_per_kg: default_unit_cost(),
        }
    }
}

impl Settings {
    /// Read the settings file from the farm directory.
    ///
    /// If the file is not present, default values for settings will be used
    ///
    /// # Returns
    ///
    /// The program settings as a `Settings` struct or an error if the file is invalid
    pub fn from_path(farm_dir: &Path) -> Result<Settings> {
        let file_path = farm_dir.join(SETTINGS_FILE_NAME);
        if !file_path.is_file() {
            return Ok(Settings::default());
        }

        read_toml(&file_path)
    }
}
