//! format-outputs-scan — result-directory discovery.
//!
//! A result directory is either one run (single mode) or a parent holding one
//! subdirectory per run (batch mode). Discovery resolves the run directories
//! for a [`Mode`] and, inside each run, the tool logs that actually exist.

use format_outputs_core::{LogFile, Mode, NormalizeError, Tool};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolve the run directories under `root`.
///
/// Batch mode yields the immediate subdirectories sorted by file name;
/// regular files in `root` are ignored. Single mode yields `root` itself.
pub fn run_dirs(root: &Path, mode: Mode) -> Result<Vec<PathBuf>, NormalizeError> {
    ensure_dir(root)?;

    match mode {
        Mode::Single => Ok(vec![root.to_path_buf()]),
        Mode::Batch => {
            let mut dirs = Vec::new();
            for entry in fs::read_dir(root).map_err(|e| NormalizeError::io(root, e))? {
                let entry = entry.map_err(|e| NormalizeError::io(root, e))?;
                let path = entry.path();
                // Follows symlinks so linked run directories are included.
                if path.is_dir() {
                    dirs.push(path);
                } else {
                    debug!(path = %path.display(), "skipping non-directory entry");
                }
            }
            dirs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
            Ok(dirs)
        }
    }
}

/// The logs of `tools` that exist as regular files in `dir`, in `tools` order.
///
/// A missing log is not an error; that tool is simply skipped.
pub fn candidate_logs(dir: &Path, tools: &[Tool]) -> Result<Vec<LogFile>, NormalizeError> {
    let mut logs = Vec::with_capacity(tools.len());

    for tool in tools {
        let path = dir.join(tool.log_file_name());
        match fs::metadata(&path) {
            Ok(meta) if meta.is_file() => logs.push(LogFile::new(tool.clone(), path)),
            Ok(_) => debug!(path = %path.display(), "log path is not a regular file, skipping"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(tool = %tool, dir = %dir.display(), "no log for tool");
            }
            Err(e) => return Err(NormalizeError::io(&path, e)),
        }
    }

    Ok(logs)
}

fn ensure_dir(path: &Path) -> Result<(), NormalizeError> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(NormalizeError::NotADirectory(path.to_path_buf()))
    }
}
