// core/resolver.rs

//! # Environment Resolver
//!
//! Builds the live configuration for one invocation. Resolution runs as a
//! fixed sequence of steps over a private map: the precedence chain for the
//! named keys (runtime override > loaded value > computed default), commit
//! and branch from the version-control collaborator with fallbacks, the
//! environment/deploy-target derivation from the branch name, and a final
//! merge of untouched loaded keys.
//!
//! The resolver is pure over its inputs: the version-control collaborator
//! and the clock are injected, and no ambient process state is read or
//! mutated here. Milestones are reported through the `log` facade.

use std::collections::HashMap;

use log::{debug, info, warn};

use crate::app::{
    DEFAULT_CONTRACT_WEBHOOK_UUID, DEFAULT_GITHUB_REPO, DEFAULT_PACTICIPANT,
    DEFAULT_PACT_CHANGED_WEBHOOK_UUID, DEFAULT_PACT_CLI_AVAILABLE, ENV_PRODUCTION, ENV_TEST,
    FALLBACK_BRANCH, FALLBACK_COMMIT_PREFIX, KEY_CONTRACT_WEBHOOK_UUID, KEY_DEPLOY_TARGET,
    KEY_ENVIRONMENT, KEY_GITHUB_REPO, KEY_GIT_BRANCH, KEY_GIT_COMMIT, KEY_PACTICIPANT,
    KEY_PACT_BROKER_BASE_URL, KEY_PACT_BROKER_TOKEN, KEY_PACT_CHANGED_WEBHOOK_UUID,
    KEY_PACT_CLI_AVAILABLE, KEY_PWD, TARGET_DEPLOY, TARGET_NO_DEPLOY,
};
use crate::core::clock::Clock;
use crate::core::vcs::Vcs;

/// Resolve the full live configuration for one invocation.
///
/// `loaded` is the previously persisted set in file order, `overrides` the
/// runtime override mapping (process environment plus `-e` flags), `cwd` the
/// working directory recorded under `PWD`. The returned map holds every
/// resolved named key plus all loaded keys carried over by the merge step.
pub fn resolve(
    loaded: &[(String, String)],
    overrides: &HashMap<String, String>,
    cwd: &str,
    vcs: &dyn Vcs,
    clock: &dyn Clock,
) -> HashMap<String, String> {
    let loaded_map: HashMap<&str, &str> = loaded
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();

    let mut live = HashMap::new();

    resolve_fixed_keys(&mut live, overrides, &loaded_map, cwd);
    resolve_git_info(&mut live, overrides, &loaded_map, vcs, clock);
    ensure_commit_present(&mut live, clock);
    derive_environment(&mut live, overrides, &loaded_map);
    merge_remainder(&mut live, loaded);

    live
}

/// First non-empty value in precedence order: runtime override, then loaded.
fn supplied(
    overrides: &HashMap<String, String>,
    loaded: &HashMap<&str, &str>,
    key: &str,
) -> Option<String> {
    non_empty(overrides.get(key).map(String::as_str))
        .or_else(|| non_empty(loaded.get(key).copied()))
}

/// Empty strings count as unset throughout the precedence chain.
fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

/// Apply the precedence chain to the keys with static computed defaults.
fn resolve_fixed_keys(
    live: &mut HashMap<String, String>,
    overrides: &HashMap<String, String>,
    loaded: &HashMap<&str, &str>,
    cwd: &str,
) {
    let fixed: [(&str, String); 6] = [
        (KEY_PACTICIPANT, DEFAULT_PACTICIPANT.to_string()),
        (KEY_GITHUB_REPO, DEFAULT_GITHUB_REPO.to_string()),
        (
            KEY_PACT_CHANGED_WEBHOOK_UUID,
            DEFAULT_PACT_CHANGED_WEBHOOK_UUID.to_string(),
        ),
        (
            KEY_CONTRACT_WEBHOOK_UUID,
            DEFAULT_CONTRACT_WEBHOOK_UUID.to_string(),
        ),
        (
            KEY_PACT_CLI_AVAILABLE,
            DEFAULT_PACT_CLI_AVAILABLE.to_string(),
        ),
        (KEY_PWD, cwd.to_string()),
    ];

    for (key, default) in fixed {
        let value = supplied(overrides, loaded, key).unwrap_or(default);
        debug!("Resolved {} = {}", key, value);
        live.insert(key.to_string(), value);
    }

    // Broker coordinates have no computed default and are omitted entirely
    // when nothing supplies them. The token is a secret, so only the key
    // name is logged.
    for key in [KEY_PACT_BROKER_BASE_URL, KEY_PACT_BROKER_TOKEN] {
        if let Some(value) = supplied(overrides, loaded, key) {
            debug!("Resolved {} from supplied value", key);
            live.insert(key.to_string(), value);
        }
    }
}

/// Resolve `GIT_COMMIT` and `GIT_BRANCH`, independently of each other.
///
/// The collaborator is only consulted for a value that neither the overrides
/// nor the loaded set supplies, and each call is attempted exactly once. On
/// failure the commit falls back to a per-invocation timestamp value and the
/// branch to `unknown-branch`.
fn resolve_git_info(
    live: &mut HashMap<String, String>,
    overrides: &HashMap<String, String>,
    loaded: &HashMap<&str, &str>,
    vcs: &dyn Vcs,
    clock: &dyn Clock,
) {
    match supplied(overrides, loaded, KEY_GIT_COMMIT) {
        Some(commit) => {
            debug!("Using supplied GIT_COMMIT: {}", commit);
            live.insert(KEY_GIT_COMMIT.to_string(), commit);
        }
        None => match vcs.head_commit() {
            Ok(commit) => {
                info!("Set GIT_COMMIT to: {}", commit);
                live.insert(KEY_GIT_COMMIT.to_string(), commit);
            }
            Err(e) => {
                warn!(
                    "Git command failed ({}). Using fallback value for GIT_COMMIT.",
                    e
                );
                live.insert(KEY_GIT_COMMIT.to_string(), fallback_commit(clock));
            }
        },
    }

    match supplied(overrides, loaded, KEY_GIT_BRANCH) {
        Some(branch) => {
            debug!("Using supplied GIT_BRANCH: {}", branch);
            live.insert(KEY_GIT_BRANCH.to_string(), branch);
        }
        None => match vcs.current_branch() {
            Ok(branch) => {
                info!("Set GIT_BRANCH to: {}", branch);
                live.insert(KEY_GIT_BRANCH.to_string(), branch);
            }
            Err(e) => {
                warn!(
                    "Git command failed ({}). Using fallback value for GIT_BRANCH.",
                    e
                );
                live.insert(KEY_GIT_BRANCH.to_string(), FALLBACK_BRANCH.to_string());
            }
        },
    }
}

/// Safety net: a collaborator call can "succeed" and still return an empty
/// string. The commit hash must never be empty in the final configuration.
fn ensure_commit_present(live: &mut HashMap<String, String>, clock: &dyn Clock) {
    let missing = live
        .get(KEY_GIT_COMMIT)
        .map_or(true, |v| v.trim().is_empty());

    if missing {
        let fallback = fallback_commit(clock);
        info!("Using fallback value for GIT_COMMIT: {}", fallback);
        live.insert(KEY_GIT_COMMIT.to_string(), fallback);
    }
}

fn fallback_commit(clock: &dyn Clock) -> String {
    format!("{}{}", FALLBACK_COMMIT_PREFIX, clock.now_millis())
}

/// Resolve `ENVIRONMENT` and `DEPLOY_TARGET`.
///
/// Branch-based derivation only runs when neither an override nor a loaded
/// `ENVIRONMENT` exists: `master` maps to production/deploy, `test` to
/// test/deploy, anything else (including the fallback branch) to
/// production/no_deploy. A loaded `ENVIRONMENT` is adopted as-is together
/// with the (override > loaded) deploy target. An override `DEPLOY_TARGET`
/// always wins over a derived one.
fn derive_environment(
    live: &mut HashMap<String, String>,
    overrides: &HashMap<String, String>,
    loaded: &HashMap<&str, &str>,
) {
    if let Some(environment) = non_empty(overrides.get(KEY_ENVIRONMENT).map(String::as_str)) {
        debug!("Using supplied ENVIRONMENT: {}", environment);
        live.insert(KEY_ENVIRONMENT.to_string(), environment);
        // a loaded deploy target still arrives via the merge step
        if let Some(target) = non_empty(overrides.get(KEY_DEPLOY_TARGET).map(String::as_str)) {
            live.insert(KEY_DEPLOY_TARGET.to_string(), target);
        }
        return;
    }

    if let Some(environment) = non_empty(loaded.get(KEY_ENVIRONMENT).copied()) {
        info!("Adopting persisted ENVIRONMENT: {}", environment);
        live.insert(KEY_ENVIRONMENT.to_string(), environment);
        let target = non_empty(overrides.get(KEY_DEPLOY_TARGET).map(String::as_str))
            .or_else(|| non_empty(loaded.get(KEY_DEPLOY_TARGET).copied()));
        if let Some(target) = target {
            live.insert(KEY_DEPLOY_TARGET.to_string(), target);
        }
        return;
    }

    let branch = live
        .get(KEY_GIT_BRANCH)
        .map(String::as_str)
        .unwrap_or_default();

    let (environment, derived_target) = match branch {
        "master" => (ENV_PRODUCTION, TARGET_DEPLOY),
        "test" => (ENV_TEST, TARGET_DEPLOY),
        _ => (ENV_PRODUCTION, TARGET_NO_DEPLOY),
    };

    info!(
        "Derived ENVIRONMENT={} from branch: {}",
        environment, branch
    );
    live.insert(KEY_ENVIRONMENT.to_string(), environment.to_string());

    let target = non_empty(overrides.get(KEY_DEPLOY_TARGET).map(String::as_str))
        .unwrap_or_else(|| derived_target.to_string());
    live.insert(KEY_DEPLOY_TARGET.to_string(), target);
}

/// Copy every loaded key not already resolved into the live set, unchanged.
/// Arbitrary extra keys from a prior file survive untouched.
fn merge_remainder(live: &mut HashMap<String, String>, loaded: &[(String, String)]) {
    for (key, value) in loaded {
        if !live.contains_key(key) {
            debug!("Carrying over {} from the loaded file", key);
            live.insert(key.clone(), value.clone());
        }
    }
}

/// Unit tests for the resolution pipeline.
#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use crate::core::vcs::FakeVcs;

    const CWD: &str = "/build/workspace";
    const CLOCK: FixedClock = FixedClock(1_700_000_000_000);

    fn overrides(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn loaded(entries: &[(&str, &str)]) -> Vec<(String, String)> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn git_ok() -> FakeVcs {
        FakeVcs {
            commit: Some("0a1b2c3d4e5f".to_string()),
            branch: Some("feat/checkout".to_string()),
        }
    }

    fn git_unavailable() -> FakeVcs {
        FakeVcs {
            commit: None,
            branch: None,
        }
    }

    #[test]
    fn runtime_overrides_win_for_every_curated_key() {
        let supplied = overrides(&[
            (KEY_PACTICIPANT, "my-provider"),
            (KEY_GITHUB_REPO, "me/my-provider"),
            (KEY_PACT_CHANGED_WEBHOOK_UUID, "uuid-1"),
            (KEY_CONTRACT_WEBHOOK_UUID, "uuid-2"),
            (KEY_GIT_COMMIT, "deadbeef"),
            (KEY_GIT_BRANCH, "release"),
            (KEY_ENVIRONMENT, "staging"),
            (KEY_DEPLOY_TARGET, "canary"),
            (KEY_PACT_BROKER_BASE_URL, "https://broker.example"),
            (KEY_PACT_BROKER_TOKEN, "tok-123"),
            (KEY_PACT_CLI_AVAILABLE, "false"),
        ]);
        let persisted = loaded(&[
            (KEY_PACTICIPANT, "persisted-provider"),
            (KEY_GIT_BRANCH, "master"),
            (KEY_PACT_BROKER_BASE_URL, "https://old.example"),
        ]);

        let live = resolve(&persisted, &supplied, CWD, &git_unavailable(), &CLOCK);

        for (key, value) in &supplied {
            assert_eq!(live.get(key), Some(value), "override lost for {}", key);
        }
    }

    #[test]
    fn computed_defaults_apply_without_runtime_or_loaded_values() {
        let live = resolve(&[], &HashMap::new(), CWD, &git_ok(), &CLOCK);

        assert_eq!(live[KEY_PACTICIPANT], DEFAULT_PACTICIPANT);
        assert_eq!(live[KEY_GITHUB_REPO], DEFAULT_GITHUB_REPO);
        assert_eq!(
            live[KEY_PACT_CHANGED_WEBHOOK_UUID],
            DEFAULT_PACT_CHANGED_WEBHOOK_UUID
        );
        assert_eq!(
            live[KEY_CONTRACT_WEBHOOK_UUID],
            DEFAULT_CONTRACT_WEBHOOK_UUID
        );
        assert_eq!(live[KEY_PACT_CLI_AVAILABLE], "true");
        assert_eq!(live[KEY_PWD], CWD);
    }

    #[test]
    fn loaded_values_beat_defaults() {
        let persisted = loaded(&[(KEY_PACTICIPANT, "persisted-provider")]);

        let live = resolve(&persisted, &HashMap::new(), CWD, &git_ok(), &CLOCK);
        assert_eq!(live[KEY_PACTICIPANT], "persisted-provider");
    }

    #[test]
    fn git_values_come_from_the_collaborator() {
        let live = resolve(&[], &HashMap::new(), CWD, &git_ok(), &CLOCK);

        assert_eq!(live[KEY_GIT_COMMIT], "0a1b2c3d4e5f");
        assert_eq!(live[KEY_GIT_BRANCH], "feat/checkout");
        assert_eq!(live[KEY_ENVIRONMENT], "production");
        assert_eq!(live[KEY_DEPLOY_TARGET], "no_deploy");
    }

    #[test]
    fn master_branch_derives_production_deploy() {
        let persisted = loaded(&[(KEY_GIT_BRANCH, "master")]);

        let live = resolve(&persisted, &HashMap::new(), CWD, &git_unavailable(), &CLOCK);
        assert_eq!(live[KEY_ENVIRONMENT], "production");
        assert_eq!(live[KEY_DEPLOY_TARGET], "deploy");
    }

    #[test]
    fn test_branch_derives_test_deploy() {
        let persisted = loaded(&[(KEY_GIT_BRANCH, "test")]);

        let live = resolve(&persisted, &HashMap::new(), CWD, &git_unavailable(), &CLOCK);
        assert_eq!(live[KEY_ENVIRONMENT], "test");
        assert_eq!(live[KEY_DEPLOY_TARGET], "deploy");
    }

    #[test]
    fn git_failure_falls_back_to_unknown_values() {
        let live = resolve(&[], &HashMap::new(), CWD, &git_unavailable(), &CLOCK);

        assert_eq!(live[KEY_GIT_BRANCH], "unknown-branch");
        assert_eq!(live[KEY_ENVIRONMENT], "production");
        assert_eq!(live[KEY_DEPLOY_TARGET], "no_deploy");
        assert_eq!(live[KEY_GIT_COMMIT], "unknown-commit-1700000000000");

        let pattern = regex::Regex::new(r"^unknown-commit-\d+$").unwrap();
        assert!(pattern.is_match(&live[KEY_GIT_COMMIT]));
    }

    #[test]
    fn empty_commit_from_collaborator_is_corrected() {
        let vcs = FakeVcs {
            commit: Some("   ".to_string()),
            branch: Some("main".to_string()),
        };

        let live = resolve(&[], &HashMap::new(), CWD, &vcs, &CLOCK);
        assert_eq!(live[KEY_GIT_COMMIT], "unknown-commit-1700000000000");
        assert_eq!(live[KEY_GIT_BRANCH], "main");
    }

    #[test]
    fn loaded_environment_is_adopted_without_derivation() {
        let persisted = loaded(&[
            (KEY_GIT_BRANCH, "master"),
            (KEY_ENVIRONMENT, "staging"),
            (KEY_DEPLOY_TARGET, "canary"),
        ]);

        let live = resolve(&persisted, &HashMap::new(), CWD, &git_unavailable(), &CLOCK);
        assert_eq!(live[KEY_ENVIRONMENT], "staging");
        assert_eq!(live[KEY_DEPLOY_TARGET], "canary");
    }

    // A persisted ENVIRONMENT does not short-circuit branch/commit
    // resolution; the two chains are deliberately independent.
    #[test]
    fn loaded_environment_does_not_suppress_git_resolution() {
        let persisted = loaded(&[(KEY_ENVIRONMENT, "staging")]);

        let live = resolve(&persisted, &HashMap::new(), CWD, &git_ok(), &CLOCK);
        assert_eq!(live[KEY_ENVIRONMENT], "staging");
        assert_eq!(live[KEY_GIT_COMMIT], "0a1b2c3d4e5f");
        assert_eq!(live[KEY_GIT_BRANCH], "feat/checkout");
        assert_eq!(live.get(KEY_DEPLOY_TARGET), None);
    }

    #[test]
    fn override_deploy_target_beats_derived_target() {
        let persisted = loaded(&[(KEY_GIT_BRANCH, "master")]);
        let supplied = overrides(&[(KEY_DEPLOY_TARGET, "no_deploy")]);

        let live = resolve(&persisted, &supplied, CWD, &git_unavailable(), &CLOCK);
        assert_eq!(live[KEY_ENVIRONMENT], "production");
        assert_eq!(live[KEY_DEPLOY_TARGET], "no_deploy");
    }

    #[test]
    fn arbitrary_loaded_keys_survive_the_merge() {
        let persisted = loaded(&[("FOO", "bar")]);

        let live = resolve(&persisted, &HashMap::new(), CWD, &git_ok(), &CLOCK);
        assert_eq!(live["FOO"], "bar");
    }

    #[test]
    fn broker_settings_are_omitted_when_nothing_supplies_them() {
        let live = resolve(&[], &HashMap::new(), CWD, &git_ok(), &CLOCK);
        assert_eq!(live.get(KEY_PACT_BROKER_BASE_URL), None);
        assert_eq!(live.get(KEY_PACT_BROKER_TOKEN), None);
    }

    #[test]
    fn loaded_broker_settings_are_adopted() {
        let persisted = loaded(&[(KEY_PACT_BROKER_BASE_URL, "https://broker.example")]);

        let live = resolve(&persisted, &HashMap::new(), CWD, &git_ok(), &CLOCK);
        assert_eq!(
            live[KEY_PACT_BROKER_BASE_URL],
            "https://broker.example"
        );
    }

    #[test]
    fn empty_override_counts_as_unset() {
        let supplied = overrides(&[(KEY_PACTICIPANT, "")]);

        let live = resolve(&[], &supplied, CWD, &git_ok(), &CLOCK);
        assert_eq!(live[KEY_PACTICIPANT], DEFAULT_PACTICIPANT);
    }
}
