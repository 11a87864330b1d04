//! Core types shared by discovery, the pipeline, and the run report.
//!
//! A [`Tool`] names one compiler or analyzer whose captured output lives in
//! `<Name>.log`. Discovery turns tools into [`LogFile`]s; normalizing a log
//! file yields an [`ArtifactPair`].

use serde::Serialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Suffix appended to a log's file name for the color-free copy.
pub const NOCOLORS_SUFFIX: &str = ".nocolors";
/// Suffix appended to a log's file name for the trimmed copy.
pub const CUT_SUFFIX: &str = ".cut";

/// How the result directory is laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// The root holds one subdirectory per run.
    #[default]
    Batch,
    /// The root holds the log files directly.
    Single,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Batch => write!(f, "batch"),
            Mode::Single => write!(f, "single"),
        }
    }
}

/// A tool from the configured catalog, e.g. `Clang` or `GCC`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Tool(String);

impl Tool {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// File name of the captured output, `<Name>.log`.
    pub fn log_file_name(&self) -> String {
        format!("{}.log", self.0)
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A captured tool log found on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogFile {
    pub tool: Tool,
    pub path: PathBuf,
}

impl LogFile {
    pub fn new(tool: Tool, path: impl Into<PathBuf>) -> Self {
        Self {
            tool,
            path: path.into(),
        }
    }

    /// Sibling path of the color-free copy: `<path>.nocolors`.
    pub fn nocolors_path(&self) -> PathBuf {
        append_suffix(&self.path, NOCOLORS_SUFFIX)
    }

    /// Sibling path of the trimmed copy: `<path>.cut`.
    pub fn cut_path(&self) -> PathBuf {
        append_suffix(&self.path, CUT_SUFFIX)
    }
}

/// Counters gathered while normalizing one log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ArtifactStats {
    /// Escape sequences removed by the strip pass.
    pub sequences_removed: usize,
    /// Lines in the normalized log.
    pub normalized_lines: usize,
    /// Lines written to the cut artifact.
    pub cut_lines: usize,
    /// Whether a marker line was found. `false` means the cut file is empty.
    pub marker_found: bool,
}

/// The two artifacts written for one log file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactPair {
    pub tool: Tool,
    pub source: PathBuf,
    pub nocolors: PathBuf,
    pub cut: PathBuf,
    pub stats: ArtifactStats,
}

fn append_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}
