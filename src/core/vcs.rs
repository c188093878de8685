// core/vcs.rs

//! # Version Control Collaborator
//!
//! This module provides the version-control collaborator used during
//! resolution: two calls, "current commit hash" and "current branch name",
//! each returning a trimmed string or failing. The production implementation
//! shells out to the `git` binary; the trait seam lets tests substitute a
//! scripted fake.
//!
//! ## Example Usage
//! ```rust
//! use crate::core::vcs::{GitCli, Vcs};
//!
//! if let Ok(commit) = GitCli.head_commit() {
//!     println!("HEAD is at: {}", commit);
//! }
//! ```

use std::process::Command as ProcessCommand;

use log::debug;

use crate::error::AppError;

/// The version-control collaborator. Each call is attempted at most once per
/// invocation; callers degrade to fallback values on failure.
pub trait Vcs {
    /// Commit hash of HEAD.
    fn head_commit(&self) -> Result<String, AppError>;

    /// Name of the currently checked-out branch.
    fn current_branch(&self) -> Result<String, AppError>;
}

/// Collaborator backed by the `git` command-line tool.
pub struct GitCli;

impl GitCli {
    fn rev_parse(&self, args: &[&str]) -> Result<String, AppError> {
        debug!("Running: git rev-parse {}", args.join(" "));

        let output = ProcessCommand::new("git")
            .arg("rev-parse")
            .args(args)
            // fail instead of prompting for credentials on odd setups
            .env("GIT_TERMINAL_PROMPT", "0")
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::CommandFailed(format!(
                "git rev-parse {} exited with {}: {}",
                args.join(" "),
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl Vcs for GitCli {
    fn head_commit(&self) -> Result<String, AppError> {
        self.rev_parse(&["HEAD"])
    }

    fn current_branch(&self) -> Result<String, AppError> {
        self.rev_parse(&["--abbrev-ref", "HEAD"])
    }
}

/// Scripted collaborator for tests. `None` means the underlying call fails,
/// as it would outside a git checkout.
#[cfg(test)]
pub struct FakeVcs {
    pub commit: Option<String>,
    pub branch: Option<String>,
}

#[cfg(test)]
impl Vcs for FakeVcs {
    fn head_commit(&self) -> Result<String, AppError> {
        self.commit
            .clone()
            .ok_or_else(|| AppError::CommandFailed("fatal: not a git repository".to_string()))
    }

    fn current_branch(&self) -> Result<String, AppError> {
        self.branch
            .clone()
            .ok_or_else(|| AppError::CommandFailed("fatal: not a git repository".to_string()))
    }
}
