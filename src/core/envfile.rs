// core/envfile.rs

//! # Environment File Handling
//!
//! Loads `KEY=VALUE` environment files, parses CLI overrides, and renders the
//! consolidated output file. Rendering starts from the loaded entries in file
//! order, then overlays the curated keys: an existing line is replaced in
//! place, a missing one is appended, and keys with no resolved value are
//! omitted entirely.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::{debug, warn};
use regex::{NoExpand, Regex};

use crate::app::CURATED_KEYS;

/// Errors raised while reading or writing environment files.
///
/// Callers treat a read failure as "no prior file" and a write failure as
/// non-fatal; both surface as logged warnings only.
#[derive(thiserror::Error, Debug)]
pub enum EnvFileError {
    #[error("Could not read env file {path}: {source}")]
    Read {
        path: String,
        source: dotenvy::Error,
    },

    #[error("Could not write env file {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}

/// Read previously persisted `KEY=VALUE` pairs from `path`.
///
/// Returns entries in file order with unique keys: a duplicate key keeps its
/// first position but takes the last value, matching map semantics. A missing
/// file yields an empty set; malformed lines are skipped with a warning.
pub fn read_env_file(path: &Path) -> Result<Vec<(String, String)>, EnvFileError> {
    if !path.exists() {
        debug!("No env file found at: {}", path.display());
        return Ok(Vec::new());
    }

    debug!("Loading environment variables from: {}", path.display());

    let iter = dotenvy::from_path_iter(path).map_err(|e| EnvFileError::Read {
        path: path.display().to_string(),
        source: e,
    })?;

    let mut entries: Vec<(String, String)> = Vec::new();
    for item in iter {
        match item {
            Ok((key, value)) => {
                debug!("  Loaded env var: {}", key);
                if let Some(existing) = entries.iter_mut().find(|(k, _)| *k == key) {
                    existing.1 = value;
                } else {
                    entries.push((key, value));
                }
            }
            Err(e) => {
                warn!("Skipping malformed line in {}: {}", path.display(), e);
            }
        }
    }

    Ok(entries)
}

/// Parse a single `KEY=VALUE` override string, as supplied by `-e` flags.
pub fn parse_override(s: &str) -> Option<(String, String)> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Some((key.to_string(), value.to_string())),
        _ => {
            debug!("Ignoring malformed override (expected KEY=VALUE): {}", s);
            None
        }
    }
}

/// Render the consolidated output text.
///
/// Every loaded entry is written first, preserving file order, then each
/// curated key with a non-empty resolved value either replaces the first
/// existing `KEY=...` line or is appended at the end.
pub fn render_output(loaded: &[(String, String)], live: &HashMap<String, String>) -> String {
    let mut content = String::new();

    for (key, value) in loaded {
        content.push_str(&format!("{}={}\n", key, value));
    }

    for key in CURATED_KEYS {
        let value = match live.get(key) {
            Some(v) if !v.is_empty() => v,
            _ => continue,
        };

        let line = format!("{}={}", key, value);
        let pattern = format!(r"(?m)^{}=.*$", regex::escape(key));
        let re = Regex::new(&pattern).expect("curated key patterns are valid regexes");

        if re.is_match(&content) {
            content = re.replace(&content, NoExpand(&line)).into_owned();
        } else {
            content.push_str(&line);
            content.push('\n');
        }
    }

    content
}

/// Overwrite `path` with `content` wholesale.
pub fn write_env_file(path: &Path, content: &str) -> Result<(), EnvFileError> {
    fs::write(path, content).map_err(|e| EnvFileError::Write {
        path: path.display().to_string(),
        source: e,
    })
}
