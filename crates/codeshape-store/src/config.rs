//! `codeshape.toml` configuration
//!
//! ```toml
//! [scope]
//! in_scope_prefix = "DataTorque."
//! framework_prefix = "DataTorque.Iho"
//!
//! [output]
//! indent = "tab"   # or "spaces"
//! ```
//!
//! Every key is optional. Unknown keys are rejected so typos surface.

use crate::errors::{config_error, config_not_found, io_error, Result};
use codeshape_core::snapshot::Indent;
use codeshape_core::ScopeRules;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// File looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "codeshape.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub scope: ScopeRules,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub indent: Indent,
}

impl Config {
    /// Parse configuration text
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|e| config_error(origin, &e.to_string()))
    }
}

/// Load configuration
///
/// - `Some(path)`: the file must exist and parse
/// - `None`: `codeshape.toml` in the working directory if present,
///   otherwise defaults
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let (path, required) = match explicit {
        Some(path) => (path, true),
        None => (Path::new(DEFAULT_CONFIG_FILE), false),
    };

    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound && !required => {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        Err(e) if e.kind() == ErrorKind::NotFound => return Err(config_not_found(path)),
        Err(e) => return Err(io_error("load_config", path, e)),
    };

    let config = Config::from_toml_str(&text, path)?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}
