// commands/base.rs

//! # Base Command Module
//!
//! Shared resolution driver used by the `setup` and `show` commands: load the
//! previously persisted set, snapshot the working directory, and run the
//! resolver against the injected collaborators. Every fallible step degrades
//! to a fallback value and a logged warning; nothing here aborts the run.

use std::collections::HashMap;
use std::path::Path;

use log::{info, warn};

use crate::core::clock::Clock;
use crate::core::envfile::read_env_file;
use crate::core::resolver::resolve;
use crate::core::vcs::Vcs;

/// Load the previously persisted set, degrading to an empty set on failure.
pub fn load_previous(path: &str) -> Vec<(String, String)> {
    match read_env_file(Path::new(path)) {
        Ok(entries) => {
            if !entries.is_empty() {
                info!("Loaded {} existing variables from {}", entries.len(), path);
            }
            entries
        }
        Err(e) => {
            warn!("{}. Continuing without previously persisted values.", e);
            Vec::new()
        }
    }
}

/// Run the full resolution against the given input file and overrides.
///
/// Returns the loaded set alongside the resolved live set; the loaded set is
/// needed again when rendering the output file.
pub fn resolve_environment(
    env_file: &str,
    overrides: &HashMap<String, String>,
    vcs: &dyn Vcs,
    clock: &dyn Clock,
) -> (Vec<(String, String)>, HashMap<String, String>) {
    let loaded = load_previous(env_file);
    let cwd = working_dir();
    let live = resolve(&loaded, overrides, &cwd, vcs, clock);
    (loaded, live)
}

fn working_dir() -> String {
    match std::env::current_dir() {
        Ok(path) => path.display().to_string(),
        Err(e) => {
            warn!("Could not determine the working directory: {}", e);
            ".".to_string()
        }
    }
}
