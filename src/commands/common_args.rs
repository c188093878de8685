// commands/common_args.rs

//! # Common Command Arguments
//!
//! This module defines command-line arguments and helpers shared by the
//! `setup` and `show` commands.

use std::collections::HashMap;
use std::str::FromStr;

use clap::{value_parser, Arg, ArgAction, ArgMatches};
use log::debug;

use crate::core::envfile::parse_override;

/// Output rendering for the `show` command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Common argument for supplying extra runtime overrides.
pub fn env_var() -> Arg {
    Arg::new("env")
        .short('e')
        .long("env")
        .help("Set additional runtime overrides (format: KEY=VALUE)")
        .action(ArgAction::Append)
}

/// Argument selecting the output format for `show`.
pub fn output_format() -> Arg {
    Arg::new("output")
        .long("output")
        .help("Output format")
        .value_parser(value_parser!(OutputFormat))
        .default_value("text")
}

/// Snapshot the runtime override mapping: the ambient process environment
/// plus any `-e` pairs, which take precedence over it.
pub fn runtime_overrides(matches: &ArgMatches) -> HashMap<String, String> {
    let mut overrides: HashMap<String, String> = std::env::vars().collect();

    if let Some(vars) = matches.get_many::<String>("env") {
        for var in vars {
            if let Some((key, value)) = parse_override(var) {
                debug!("  Override env var: {}", key);
                overrides.insert(key, value);
            }
        }
    }

    overrides
}
