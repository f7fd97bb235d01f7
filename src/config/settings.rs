//! User settings for budget-setup
//!
//! Preferences for the wizard shell: the icon given to custom categories,
//! how dates are shown, the default export format and the log filter.

use serde::{Deserialize, Serialize};

use super::paths::SetupPaths;
use crate::error::SetupError;
use crate::export::ExportFormat;
use crate::models::category::DEFAULT_CUSTOM_ICON;

/// User settings for budget-setup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Icon assigned to custom categories
    #[serde(default = "default_custom_icon")]
    pub custom_category_icon: String,

    /// Date display format (strftime). Stored dates are always ISO.
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Format used when printing or exporting snapshots
    #[serde(default)]
    pub export_format: ExportFormat,

    /// tracing filter directive used when RUST_LOG is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_custom_icon() -> String {
    DEFAULT_CUSTOM_ICON.to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_log_filter() -> String {
    "budget_setup=info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            custom_category_icon: default_custom_icon(),
            date_format: default_date_format(),
            export_format: ExportFormat::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &SetupPaths) -> Result<Self, SetupError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                SetupError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                SetupError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SetupPaths) -> Result<(), SetupError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            SetupError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            SetupError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
