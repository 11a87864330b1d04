//! Writing the `.nocolors` and `.cut` artifacts for one log file.

use crate::{cut, strip, ArtifactPair, ArtifactStats, LogFile, NormalizeError};
use std::fs;
use tracing::debug;

/// Normalize `log` and write both sibling artifacts.
///
/// The raw log is only read. Existing artifacts are overwritten. The cut is
/// taken from the normalized bytes that were just written.
pub fn normalize_log(log: &LogFile, marker: &str) -> Result<ArtifactPair, NormalizeError> {
    let raw = fs::read(&log.path).map_err(|e| NormalizeError::io(&log.path, e))?;

    let stripped = strip::strip_counted(&raw);
    let nocolors = log.nocolors_path();
    fs::write(&nocolors, &stripped.bytes).map_err(|e| NormalizeError::io(&nocolors, e))?;

    let section = cut::tail_section(&stripped.bytes, marker);
    let cut_path = log.cut_path();
    fs::write(&cut_path, section.bytes).map_err(|e| NormalizeError::io(&cut_path, e))?;

    let stats = ArtifactStats {
        sequences_removed: stripped.removed,
        normalized_lines: cut::count_lines(&stripped.bytes),
        cut_lines: section.line_count(),
        marker_found: section.marker_line.is_some(),
    };

    debug!(
        log = %log.path.display(),
        tool = %log.tool,
        removed = stats.sequences_removed,
        cut_lines = stats.cut_lines,
        marker_found = stats.marker_found,
        "normalized log"
    );

    Ok(ArtifactPair {
        tool: log.tool.clone(),
        source: log.path.clone(),
        nocolors,
        cut: cut_path,
        stats,
    })
}
