// commands/setup.rs

//! # Setup Command Module
//!
//! This module provides the `setup` command for the pact-env application.
//! The `setup` command resolves the full pipeline environment configuration
//! (participant identity, webhook identifiers, git commit/branch, deployment
//! environment and deploy target) and persists it to the consolidated env
//! file consumed by downstream pipeline steps.
//!
//! ## Features
//! - Merge previously persisted values, runtime overrides, and computed defaults.
//! - Derive the deployment environment and deploy target from the branch name.
//! - Degrade every external failure (file read/write, git) to a fallback value.
//!
//! ## Example Usage
//! ```bash
//! ./pact-env setup
//! ./pact-env --env-file .env --out-file .env.pact setup -e PACT_BROKER_TOKEN=abc123
//! ```

use std::collections::HashMap;
use std::path::Path;

use clap::{ArgMatches, Command};
use log::warn;

use crate::commands::base::resolve_environment;
use crate::commands::common_args::{env_var, runtime_overrides};
use crate::core::clock::{Clock, SystemClock};
use crate::core::envfile::{render_output, write_env_file};
use crate::core::vcs::{GitCli, Vcs};
use crate::utils::display::print_unicode_box;
use crate::{globals, print_info, print_success};
use crate::app::{KEY_DEPLOY_TARGET, KEY_ENVIRONMENT, KEY_GIT_BRANCH, KEY_GIT_COMMIT};

/// Configures the `setup` command for the CLI application.
pub fn command() -> Command {
    Command::new("setup")
        .about("Resolve the pipeline environment and write the consolidated env file")
        .arg(env_var())
}

/// Executes the `setup` command.
pub fn execute(matches: &ArgMatches) {
    print_unicode_box("🔧 Setting up pipeline environment...");

    let overrides = runtime_overrides(matches);
    run_setup(
        globals::env_file(),
        globals::output_file(),
        &overrides,
        &GitCli,
        &SystemClock,
    );
}

/// Drive one full resolution: load, resolve, report, render, persist.
///
/// The collaborators are injected so the whole pipeline runs deterministically
/// under test with a scripted git and a fixed clock.
pub fn run_setup(
    env_file: &str,
    out_file: &str,
    overrides: &HashMap<String, String>,
    vcs: &dyn Vcs,
    clock: &dyn Clock,
) {
    let (loaded, live) = resolve_environment(env_file, overrides, vcs, clock);

    print_info!("Environment set up successfully:");
    print_info!("GIT_COMMIT: {}", value_or_not_set(&live, KEY_GIT_COMMIT));
    print_info!("GIT_BRANCH: {}", value_or_not_set(&live, KEY_GIT_BRANCH));
    print_info!("Environment: {}", value_or_not_set(&live, KEY_ENVIRONMENT));
    print_info!(
        "Deploy target: {}",
        value_or_not_set(&live, KEY_DEPLOY_TARGET)
    );

    let content = render_output(&loaded, &live);
    match write_env_file(Path::new(out_file), &content) {
        Ok(()) => print_success!("Wrote consolidated environment variables to {}", out_file),
        Err(e) => warn!("{}. The resolved environment was not persisted.", e),
    }
}

fn value_or_not_set<'a>(live: &'a HashMap<String, String>, key: &str) -> &'a str {
    live.get(key).map(String::as_str).unwrap_or("not set")
}
