//! Export module for budget-setup
//!
//! Writes wizard snapshots and reads intent scripts in two formats:
//! - JSON: machine-readable
//! - YAML: human-readable, handy for hand-written scripts

pub mod json;
pub mod yaml;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

use crate::error::{SetupError, SetupResult};
use crate::setup::{Intent, SetupSnapshot};

pub use json::{export_snapshot_json, SnapshotExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_snapshot_yaml;

/// Serialization format for snapshots and scripts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Yaml,
}

impl ExportFormat {
    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// File extension used for exports in this format
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

/// Write a snapshot in the requested format
pub fn export_snapshot<W: Write>(
    snapshot: &SetupSnapshot,
    format: ExportFormat,
    writer: &mut W,
) -> SetupResult<()> {
    match format {
        ExportFormat::Json => export_snapshot_json(snapshot, writer),
        ExportFormat::Yaml => export_snapshot_yaml(snapshot, writer),
    }
}

/// Load an intent script, picking the format from the extension unless given
pub fn read_intent_script(path: &Path, format: Option<ExportFormat>) -> SetupResult<Vec<Intent>> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        SetupError::Io(format!("Failed to read script {}: {}", path.display(), e))
    })?;

    match format.or_else(|| ExportFormat::from_path(path)) {
        Some(ExportFormat::Yaml) => yaml::read_intents_yaml(&contents),
        Some(ExportFormat::Json) | None => json::read_intents_json(&contents),
    }
}
