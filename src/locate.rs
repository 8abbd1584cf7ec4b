//! Video file discovery.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Find the first file in `dir` whose name contains `pattern`
/// (case-insensitive) and whose extension equals `extension`
/// (case-insensitive, without the leading dot).
///
/// Scans immediate children only. Directory order decides ties, so callers
/// must not assume a stable winner. Returns `Ok(None)` when nothing
/// matches.
pub fn find_video(dir: &Path, pattern: &str, extension: &str) -> Result<Option<PathBuf>> {
    let pattern = pattern.to_lowercase();

    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read videos directory: {}", dir.display()))?;

    for entry in entries {
        let entry = entry?;
        let path = entry.path();

        let extension_matches = path
            .extension()
            .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(extension))
            .unwrap_or(false);
        if !extension_matches {
            continue;
        }

        let name = entry.file_name();
        if name.to_string_lossy().to_lowercase().contains(&pattern) {
            return Ok(Some(path));
        }
    }

    Ok(None)
}
