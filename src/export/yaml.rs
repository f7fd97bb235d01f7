//! YAML export and script loading

use crate::error::SetupResult;
use crate::export::json::SnapshotExport;
use crate::setup::{Intent, SetupSnapshot};
use std::io::Write;

/// Write a snapshot as YAML with a short header
pub fn export_snapshot_yaml<W: Write>(
    snapshot: &SetupSnapshot,
    writer: &mut W,
) -> SetupResult<()> {
    let export = SnapshotExport::new(snapshot.clone());

    writeln!(writer, "# Budget setup snapshot")?;
    writeln!(writer, "# Generated: {}", export.exported_at)?;
    writeln!(writer, "# App Version: {}", export.app_version)?;
    writeln!(writer)?;

    serde_yaml::to_writer(writer, &export)?;
    Ok(())
}

/// Parse a YAML sequence of intents
pub fn read_intents_yaml(yaml_str: &str) -> SetupResult<Vec<Intent>> {
    Ok(serde_yaml::from_str(yaml_str)?)
}
