//! Error taxonomy for the normalizer.

use std::path::{Path, PathBuf};

/// Everything that can stop a normalization run.
///
/// All variants are fatal: the run aborts on the first error and artifacts
/// already written are left in place.
#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    /// The target path does not exist or is not a directory.
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// A filesystem operation failed.
    #[error("I/O error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A tool name that is not in the configured catalog.
    #[error("unknown tool {name:?} (known tools: {})", .known.join(", "))]
    UnknownTool { name: String, known: Vec<String> },

    /// Configuration values that parsed but make no sense.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to load configuration")]
    Config(#[from] config::ConfigError),
}

impl NormalizeError {
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
