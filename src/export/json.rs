//! JSON export and script loading
//!
//! Snapshots are wrapped with a schema version and timestamp so exported
//! files can be told apart later.

use crate::error::SetupResult;
use crate::setup::{Intent, SetupSnapshot};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Exported wizard state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// The wizard state itself
    pub snapshot: SetupSnapshot,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Counts for a quick look at an export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub selected_count: usize,
    pub custom_category_count: usize,
    pub transaction_count: usize,
}

impl SnapshotExport {
    /// Wrap a snapshot for export
    pub fn new(snapshot: SetupSnapshot) -> Self {
        let metadata = ExportMetadata {
            selected_count: snapshot.selected_ids.len(),
            custom_category_count: snapshot.custom_categories.len(),
            transaction_count: snapshot.transactions.values().map(Vec::len).sum(),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            snapshot,
            metadata,
        }
    }
}

/// Write a snapshot as pretty-printed JSON
pub fn export_snapshot_json<W: Write>(
    snapshot: &SetupSnapshot,
    writer: &mut W,
) -> SetupResult<()> {
    let export = SnapshotExport::new(snapshot.clone());
    serde_json::to_writer_pretty(&mut *writer, &export)?;
    writeln!(writer)?;
    Ok(())
}

/// Parse a JSON array of intents
pub fn read_intents_json(json_str: &str) -> SetupResult<Vec<Intent>> {
    Ok(serde_json::from_str(json_str)?)
}
