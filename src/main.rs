// main.rs

//! # pact-env - Main Entry Point
//!
//! This is the main entry point for the pact-env application.
//! It initializes the CLI, configures the global file paths, and handles user
//! commands (`setup`, `show`).
//!
//! ## Global Arguments
//!
//! These arguments can be specified for **any command**.
//!
//! - `--env-file` - The env file to load previously persisted values from (default: `.env`).
//! - `--out-file` - The consolidated env file to write (default: `.env.pact`).
//! - `--log-level` - The logging level (default: `info`). Possible values: `error`, `warn`, `info`, `debug`, `trace`.
//!
//! ## Example Usage
//! ```bash
//! ./pact-env setup
//! ./pact-env --env-file .env --out-file .env.pact setup -e PACT_BROKER_TOKEN=abc123
//! ./pact-env show --output json
//! ```
//!
//! For detailed help, use `--help` or `-h` flags.

mod app;
mod commands;
mod core;
mod error;
mod globals;
mod utils;

use std::process;

use clap::{Arg, ArgAction, Command};
use log::debug;

use crate::app::{
    APP_ABOUT, APP_AUTHOR, APP_NAME, APP_VERSION, DEFAULT_ENV_FILE, DEFAULT_LOG_LEVEL,
    DEFAULT_OUTPUT_FILE, LOG_LEVELS,
};
use crate::utils::logging::initialize_logger;

/// Main function that initializes the CLI and handles command execution.
fn main() {
    let matches = Command::new(APP_NAME)
        .version(APP_VERSION)
        .author(APP_AUTHOR)
        .about(APP_ABOUT)
        // ====================
        // Global Flags
        // ====================
        .arg(
            Arg::new("env-file")
                .long("env-file")
                .help("Env file to load previously persisted values from")
                .global(true)
                .default_value(DEFAULT_ENV_FILE)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("out-file")
                .long("out-file")
                .help("Consolidated env file to write for downstream steps")
                .global(true)
                .default_value(DEFAULT_OUTPUT_FILE)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .help("Set the logging level")
                .global(true)
                .value_parser(clap::builder::PossibleValuesParser::new(LOG_LEVELS))
                .ignore_case(true)
                .default_value(DEFAULT_LOG_LEVEL)
                .action(ArgAction::Set),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        // ====================
        // Subcommand Definitions
        // ====================
        .subcommand(commands::setup::command())
        .subcommand(commands::show::command())
        .get_matches();

    // ====================
    // Initialize Logger
    // ====================
    let log_level = matches.get_one::<String>("log-level").unwrap();
    initialize_logger(log_level);

    debug!("Logger initialized with level: {}", log_level);

    // Get the file paths from command-line arguments
    let env_file = matches
        .get_one::<String>("env-file")
        .unwrap_or(&DEFAULT_ENV_FILE.to_string())
        .clone();

    let output_file = matches
        .get_one::<String>("out-file")
        .unwrap_or(&DEFAULT_OUTPUT_FILE.to_string())
        .clone();

    debug!("Env file: {}", env_file);
    debug!("Output file: {}", output_file);

    // Initialize the global values
    globals::init_globals(env_file, output_file);

    // ====================
    // Command Execution
    // ====================
    match matches.subcommand() {
        Some(("setup", sub_matches)) => commands::setup::execute(sub_matches),
        Some(("show", sub_matches)) => commands::show::execute(sub_matches),
        _ => {
            print_error!("Unknown command. Use --help for usage.");
            process::exit(1);
        }
    }
}
