// globals.rs

//! # Global Configuration Module
//!
//! This module provides global variables for the resolved file paths.
//! It manages the input env file and output file locations using `OnceCell`
//! for safe, single initialization from the global CLI flags.
//!
//! ## Features
//! - Stores the input and output file paths using `OnceCell`.
//! - Provides an initialization function to set global values (`init_globals`).
//! - Exposes getter functions that fall back to the compiled defaults.

use once_cell::sync::OnceCell;

use crate::app::{DEFAULT_ENV_FILE, DEFAULT_OUTPUT_FILE};

// ============================
// Global Static Variables
// ============================

/// Path of the env file loaded at invocation start.
///
/// Set once from the `--env-file` flag via `init_globals`.
static ENV_FILE_PATH: OnceCell<String> = OnceCell::new();

/// Path of the consolidated output file.
///
/// Set once from the `--out-file` flag via `init_globals`.
static OUTPUT_FILE_PATH: OnceCell<String> = OnceCell::new();

// ============================
// Initialization Function
// ============================

/// Initializes the global file paths.
///
/// This function must be called once before accessing global values via the
/// getter functions. It uses `OnceCell` to ensure each value is only
/// initialized once (first initialization wins).
///
/// # Arguments
/// - `env_file` - Path of the input env file.
/// - `output_file` - Path of the consolidated output file.
pub fn init_globals(env_file: String, output_file: String) {
    ENV_FILE_PATH.set(env_file).ok();
    OUTPUT_FILE_PATH.set(output_file).ok();
}

// ============================
// Getter Functions
// ============================

/// Retrieves the configured input env file path.
///
/// If no path was set via `init_globals`, returns the default from `app`.
pub fn env_file() -> &'static str {
    ENV_FILE_PATH.get().map_or(DEFAULT_ENV_FILE, |s| s.as_str())
}

/// Retrieves the configured output file path.
///
/// If no path was set via `init_globals`, returns the default from `app`.
pub fn output_file() -> &'static str {
    OUTPUT_FILE_PATH
        .get()
        .map_or(DEFAULT_OUTPUT_FILE, |s| s.as_str())
}
