//! Run report — what a normalization run wrote, as text or JSON.

use format_outputs_core::{ArtifactPair, Mode};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Summary of one [`Normalizer::run`](crate::Normalizer::run).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub root: PathBuf,
    pub mode: Mode,
    /// Run directories visited, including those without any tool log.
    pub run_dirs: usize,
    /// Artifact pairs in the order they were written.
    pub artifacts: Vec<ArtifactPair>,
}

impl RunReport {
    pub fn new(root: &Path, mode: Mode) -> Self {
        Self {
            root: root.to_path_buf(),
            mode,
            run_dirs: 0,
            artifacts: Vec::new(),
        }
    }

    /// Logs whose cut came out empty because the marker never appeared.
    pub fn without_marker(&self) -> impl Iterator<Item = &ArtifactPair> {
        self.artifacts.iter().filter(|a| !a.stats.marker_found)
    }

    /// One line per log, paths relative to the root, then a totals line.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for pair in &self.artifacts {
            let source = pair.source.strip_prefix(&self.root).unwrap_or(&pair.source);
            let stats = &pair.stats;
            let cut = if stats.marker_found {
                format!("{} of {} lines cut", stats.cut_lines, stats.normalized_lines)
            } else {
                "marker not found".to_string()
            };
            let _ = writeln!(
                out,
                "{}: {} escapes removed, {}",
                source.display(),
                stats.sequences_removed,
                cut
            );
        }
        let _ = writeln!(
            out,
            "{} log(s) normalized in {} run director{}",
            self.artifacts.len(),
            self.run_dirs,
            if self.run_dirs == 1 { "y" } else { "ies" }
        );
        out
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
