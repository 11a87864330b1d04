//! format-outputs-core — log normalization primitives.
//!
//! This crate holds everything that does not depend on how result directories
//! are laid out: the data model, configuration, the error taxonomy, and the
//! two text transforms applied to every captured tool log.
//!
//! # Pipeline
//!
//! ```text
//! <Tool>.log ──► strip ──► <Tool>.log.nocolors
//!                  │
//!                  └──► cut ──► <Tool>.log.cut
//! ```
//!
//! The cut always reads the normalized bytes, never the raw log.

pub mod artifact;
pub mod config;
pub mod cut;
pub mod error;
pub mod strip;
pub mod types;

pub use error::NormalizeError;
pub use types::{ArtifactPair, ArtifactStats, LogFile, Mode, Tool};
