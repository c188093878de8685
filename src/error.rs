// error.rs

//! # Error Handling Module
//!
//! This module provides custom error handling for the pact-env application.
//! It defines an `AppError` enum covering the error conditions the application
//! may encounter when talking to its external collaborators (the git CLI and
//! the filesystem). Implementations of the standard `Display` and `Error`
//! traits are provided to allow seamless integration with Rust's error
//! handling ecosystem.
//!
//! None of these errors is fatal to a pipeline run: every caller degrades to
//! a fallback value and a logged warning.

use std::error::Error;
use std::fmt;

// ============================
// Application Error Definitions
// ============================

/// Represents errors that may occur within the application.
#[derive(Debug)]
pub enum AppError {
    /// Error returned when a version-control command exits unsuccessfully.
    ///
    /// The error message is stored as a `String` for detailed reporting.
    CommandFailed(String),

    /// Wrapper for standard I/O errors.
    ///
    /// This variant allows propagating errors originating from `std::io`
    /// operations, including a failure to spawn the git binary at all.
    IoError(std::io::Error),
}

// ============================
// Display Trait Implementation
// ============================

impl fmt::Display for AppError {
    /// Formats the `AppError` for user-friendly output.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::CommandFailed(msg) => write!(f, "Command failed: {}", msg),
            Self::IoError(err) => write!(f, "IO error: {}", err),
        }
    }
}

// ============================
// Error Trait Implementation
// ============================

impl Error for AppError {}

// ============================
// Conversion From std::io::Error
// ============================

impl From<std::io::Error> for AppError {
    /// Converts a standard I/O error into an `AppError::IoError`.
    fn from(error: std::io::Error) -> Self {
        Self::IoError(error)
    }
}
