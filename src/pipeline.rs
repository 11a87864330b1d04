//! Pipeline — drives discovery and normalization over a result directory.

use crate::report::RunReport;
use format_outputs_core::artifact::normalize_log;
use format_outputs_core::config::Config;
use format_outputs_core::{Mode, NormalizeError, Tool};
use format_outputs_scan::{candidate_logs, run_dirs};
use std::path::Path;
use tracing::{debug, info};

/// A configured normalization run: layout, tool selection, and marker.
#[derive(Debug, Clone)]
pub struct Normalizer {
    mode: Mode,
    tools: Vec<Tool>,
    marker: String,
}

impl Normalizer {
    pub fn new(mode: Mode, tools: Vec<Tool>, marker: impl Into<String>) -> Self {
        Self {
            mode,
            tools,
            marker: marker.into(),
        }
    }

    /// Build from loaded configuration, narrowing the catalog to `tool_filter`
    /// (empty means all tools). Unknown names fail here, before any I/O.
    pub fn from_config(
        config: &Config,
        mode: Mode,
        tool_filter: &[String],
    ) -> Result<Self, NormalizeError> {
        let tools = config.select_tools(tool_filter)?;
        Ok(Self::new(mode, tools, config.normalize.marker.clone()))
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Normalize every tool log under `root`.
    ///
    /// Run directories are visited one at a time in name order. Any error
    /// aborts the run; artifacts written before it stay on disk.
    pub fn run(&self, root: &Path) -> Result<RunReport, NormalizeError> {
        let dirs = run_dirs(root, self.mode)?;
        let mut report = RunReport::new(root, self.mode);

        for dir in &dirs {
            debug!(dir = %dir.display(), "processing run directory");
            for log in candidate_logs(dir, &self.tools)? {
                report.artifacts.push(normalize_log(&log, &self.marker)?);
            }
            report.run_dirs += 1;
        }

        info!(
            root = %root.display(),
            mode = %self.mode,
            run_dirs = report.run_dirs,
            logs = report.artifacts.len(),
            "normalization finished"
        );
        Ok(report)
    }
}
