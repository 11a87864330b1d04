//! format-outputs — post-processing of captured compiler and analyzer logs.
//!
//! For every `<Tool>.log` found in a result directory this crate writes a
//! color-free copy (`.nocolors`) and the defects section (`.cut`) that the
//! downstream parser reads. The layers are exposed as public modules so the
//! integration harnesses can drive them directly.
//!
//! # Architecture
//!
//! ```text
//! scan::run_dirs ──► scan::candidate_logs ──► artifact::normalize_log ──► RunReport
//! ```
//!
//! Everything runs sequentially on the calling thread. The first error aborts
//! the run.

pub mod pipeline;
pub mod report;

pub use format_outputs_core::{config, ArtifactPair, Mode, NormalizeError, Tool};
pub use pipeline::Normalizer;
pub use report::RunReport;
