use crate::error::Result;
use crate::types::TargetGroup;
use std::fs;
use std::path::Path;
use tracing::info;

/// Serializes the targets as pretty-printed JSON and overwrites `path`.
/// The previous file contents are replaced wholesale, never merged; an
/// empty target list writes `[]`.
pub fn write_targets(groups: &[TargetGroup], path: &Path) -> Result<()> {
    let json_content = serde_json::to_string_pretty(groups)?;
    fs::write(path, json_content)?;
    info!("Wrote {} targets to {}", groups.len(), path.display());
    Ok(())
}
