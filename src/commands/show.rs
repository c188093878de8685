// commands/show.rs

//! # Show Command Module
//!
//! This module provides the `show` command for the pact-env application.
//! The `show` command runs the same resolution as `setup` but prints the
//! resolved configuration to stdout instead of persisting it, either as
//! `KEY=VALUE` lines or as JSON for other tooling to consume.
//!
//! ## Example Usage
//! ```bash
//! ./pact-env show
//! ./pact-env show --output json
//! ```

use std::collections::BTreeMap;

use clap::{ArgMatches, Command};

use crate::commands::base::resolve_environment;
use crate::commands::common_args::{env_var, output_format, runtime_overrides, OutputFormat};
use crate::core::clock::SystemClock;
use crate::core::vcs::GitCli;
use crate::{globals, print_error};

/// Configures the `show` command for the CLI application.
pub fn command() -> Command {
    Command::new("show")
        .about("Resolve the pipeline environment and print it without persisting")
        .arg(env_var())
        .arg(output_format())
}

/// Executes the `show` command.
pub fn execute(matches: &ArgMatches) {
    let overrides = runtime_overrides(matches);
    let format = matches.get_one::<OutputFormat>("output").unwrap();

    let (_, live) = resolve_environment(globals::env_file(), &overrides, &GitCli, &SystemClock);

    // sorted for stable, diffable output
    let sorted: BTreeMap<&str, &str> = live
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();

    match format {
        OutputFormat::Json => match serde_json::to_string_pretty(&sorted) {
            Ok(json) => println!("{}", json),
            Err(e) => print_error!("Failed to serialize environment: {}", e),
        },
        OutputFormat::Text => {
            for (key, value) in sorted {
                println!("{}={}", key, value);
            }
        }
    }
}
