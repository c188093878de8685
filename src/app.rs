// app.rs

//! # Application Constants
//!
//! Central definitions for the pact-env CLI: application metadata, default
//! file paths, logging levels, and the named configuration keys the resolver
//! works with, together with their computed defaults.

// ============================
// Application Metadata
// ============================

pub const APP_NAME: &str = "pact-env";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_AUTHOR: &str = "PactFlow Examples <hello@pactflow.io>";
pub const APP_ABOUT: &str =
    "Resolve and persist environment configuration for Pact contract CI pipelines";

// ============================
// Defaults and Logging
// ============================

/// Input env file read at the start of every invocation, relative to the cwd.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Consolidated output file consumed by downstream pipeline steps.
pub const DEFAULT_OUTPUT_FILE: &str = ".env.pact";

pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

// ============================
// Configuration Keys
// ============================

pub const KEY_PACTICIPANT: &str = "PACTICIPANT";
pub const KEY_GITHUB_REPO: &str = "GITHUB_REPO";
pub const KEY_PACT_CHANGED_WEBHOOK_UUID: &str = "PACT_CHANGED_WEBHOOK_UUID";
pub const KEY_CONTRACT_WEBHOOK_UUID: &str =
    "CONTRACT_REQUIRING_VERIFICATION_PUBLISHED_WEBHOOK_UUID";
pub const KEY_GIT_COMMIT: &str = "GIT_COMMIT";
pub const KEY_GIT_BRANCH: &str = "GIT_BRANCH";
pub const KEY_ENVIRONMENT: &str = "ENVIRONMENT";
pub const KEY_DEPLOY_TARGET: &str = "DEPLOY_TARGET";
pub const KEY_PACT_BROKER_BASE_URL: &str = "PACT_BROKER_BASE_URL";
pub const KEY_PACT_BROKER_TOKEN: &str = "PACT_BROKER_TOKEN";
pub const KEY_PACT_CLI_AVAILABLE: &str = "PACT_CLI_AVAILABLE";
pub const KEY_PWD: &str = "PWD";

// ============================
// Computed Defaults
// ============================

pub const DEFAULT_PACTICIPANT: &str = "pactflow-example-provider";
pub const DEFAULT_GITHUB_REPO: &str = "pactflow/example-provider";
pub const DEFAULT_PACT_CHANGED_WEBHOOK_UUID: &str = "c76b601e-d66a-4eb1-88a4-6ebc50c0df8b";
pub const DEFAULT_CONTRACT_WEBHOOK_UUID: &str = "8ce63439-6b70-4e9b-8891-703d5ea2953c";
pub const DEFAULT_PACT_CLI_AVAILABLE: &str = "true";

/// Deployment environments derived from the branch name.
pub const ENV_PRODUCTION: &str = "production";
pub const ENV_TEST: &str = "test";

/// Deploy targets derived from the branch name.
pub const TARGET_DEPLOY: &str = "deploy";
pub const TARGET_NO_DEPLOY: &str = "no_deploy";

/// Substitutes used when no git checkout is available.
pub const FALLBACK_BRANCH: &str = "unknown-branch";
pub const FALLBACK_COMMIT_PREFIX: &str = "unknown-commit-";

// ============================
// Curated Output Keys
// ============================

/// Keys always considered for the output file, in overlay order. A curated
/// key with a non-empty resolved value replaces any line inherited from the
/// loaded file; keys with no resolved value are omitted entirely.
pub const CURATED_KEYS: [&str; 11] = [
    KEY_PACTICIPANT,
    KEY_GITHUB_REPO,
    KEY_PACT_CHANGED_WEBHOOK_UUID,
    KEY_CONTRACT_WEBHOOK_UUID,
    KEY_GIT_COMMIT,
    KEY_GIT_BRANCH,
    KEY_ENVIRONMENT,
    KEY_DEPLOY_TARGET,
    KEY_PACT_BROKER_BASE_URL,
    KEY_PACT_BROKER_TOKEN,
    KEY_PACT_CLI_AVAILABLE,
];
