//! Configuration types for format-outputs.
//!
//! [`Config::load`] layers, in order: the embedded defaults, the user file at
//! `~/.config/format-outputs/config.toml` (optional, never created), an
//! explicit `--config` file, and `FORMAT_OUTPUTS__*` environment variables.
//! [`Config::defaults`] returns the embedded defaults without touching the
//! filesystem (useful in tests).

use crate::{NormalizeError, Tool};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[normalize]
marker = "CURRENT DEFECTS"
tools  = ["Clang", "GCC"]
"#;

const ENV_PREFIX: &str = "FORMAT_OUTPUTS";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub normalize: NormalizeConfig,
}

/// `[normalize]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct NormalizeConfig {
    /// Text whose first containing line starts the cut section.
    #[serde(default = "default_marker")]
    pub marker: String,
    /// Tool catalog, in processing order. Each maps to `<Name>.log`.
    #[serde(default = "default_tools")]
    pub tools: Vec<String>,
}

fn default_marker() -> String { "CURRENT DEFECTS".to_string() }
fn default_tools() -> Vec<String> { vec!["Clang".to_string(), "GCC".to_string()] }

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            tools: default_tools(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the layered configuration. `explicit` must exist when given.
    pub fn load(explicit: Option<&Path>) -> Result<Self, NormalizeError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(config_path().as_path()).required(false));

        if let Some(path) = explicit {
            tracing::debug!(path = %path.display(), "loading explicit config");
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let cfg: Config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("normalize.tools"),
            )
            .build()?
            .try_deserialize()?;

        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a TOML document layered on top of the built-in defaults.
    pub fn from_toml(src: &str) -> Result<Self, NormalizeError> {
        let cfg: Config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from_str(src, config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    pub fn validate(&self) -> Result<(), NormalizeError> {
        if self.normalize.marker.is_empty() {
            return Err(NormalizeError::InvalidConfig("marker must not be empty".to_string()));
        }
        if self.normalize.tools.is_empty() {
            return Err(NormalizeError::InvalidConfig("tool list must not be empty".to_string()));
        }
        if let Some(bad) = self
            .normalize
            .tools
            .iter()
            .find(|t| t.is_empty() || t.contains(['/', '\\']))
        {
            return Err(NormalizeError::InvalidConfig(format!(
                "tool name {bad:?} is not a plain file name"
            )));
        }
        Ok(())
    }

    /// The full tool catalog, in configured order.
    pub fn tools(&self) -> Vec<Tool> {
        self.normalize.tools.iter().map(Tool::new).collect()
    }

    /// Narrow the catalog to `names`, matched case-insensitively. An empty
    /// selection means every tool. The result keeps catalog order.
    pub fn select_tools(&self, names: &[String]) -> Result<Vec<Tool>, NormalizeError> {
        if names.is_empty() {
            return Ok(self.tools());
        }

        for name in names {
            if !self.normalize.tools.iter().any(|t| t.eq_ignore_ascii_case(name)) {
                return Err(NormalizeError::UnknownTool {
                    name: name.clone(),
                    known: self.normalize.tools.clone(),
                });
            }
        }

        Ok(self
            .normalize
            .tools
            .iter()
            .filter(|t| names.iter().any(|n| n.eq_ignore_ascii_case(t)))
            .map(Tool::new)
            .collect())
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("format-outputs")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
