// src/config/io.rs
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::types::{Overrides, RankConfig};
use crate::error::{RankError, Result};

pub const CONFIG_FILE: &str = "pagerank.toml";

/// Parses a TOML document into a config, filling absent keys with defaults.
///
/// # Errors
/// Returns `Config` if the TOML is malformed or has unknown keys.
pub fn parse_toml(content: &str) -> Result<RankConfig> {
    Ok(toml::from_str(content)?)
}

/// Reads `path`, or `pagerank.toml` in the working directory when `path` is `None`.
/// A missing default file yields the defaults; a missing explicit file is an error.
///
/// # Errors
/// Returns error if the file cannot be read or parsed.
pub fn load_file(path: Option<&Path>) -> Result<RankConfig> {
    let (path, required) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => (PathBuf::from(CONFIG_FILE), false),
    };
    if !required && !path.exists() {
        return Ok(RankConfig::default());
    }
    let content = fs::read_to_string(&path).map_err(|source| RankError::ConfigIo {
        source,
        path: path.clone(),
    })?;
    debug!(path = %path.display(), "loaded config file");
    parse_toml(&content).map_err(|e| RankError::Config(format!("{}: {e}", path.display())))
}

pub fn apply_overrides(config: &mut RankConfig, overrides: Overrides) {
    if let Some(d) = overrides.damping {
        config.damping = d;
    }
    if let Some(s) = overrides.samples {
        config.samples = s;
    }
    if let Some(t) = overrides.threshold {
        config.threshold = t;
    }
    if overrides.max_iterations.is_some() {
        config.max_iterations = overrides.max_iterations;
    }
    if overrides.seed.is_some() {
        config.seed = overrides.seed;
    }
    if let Some(ext) = overrides.extension {
        config.extension = ext;
    }
}
