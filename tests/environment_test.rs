// Environment layering tests. Env vars are process-global, so every test
// that touches them runs under #[serial].

use serial_test::serial;
use tag_resolve::environment::{env_value, resolve_branch, resolve_fallback_tag};

const BRANCH_VAR: &str = "TAG_RESOLVE_TEST_BRANCH";
const TAG_VAR: &str = "TAG_RESOLVE_TEST_TAG";

fn release_branches() -> Vec<String> {
    vec!["master".to_string()]
}

#[test]
#[serial]
fn test_env_value_reads_set_variable() {
    std::env::set_var(BRANCH_VAR, "feature_x");
    assert_eq!(env_value(BRANCH_VAR), Some("feature_x".to_string()));
    std::env::remove_var(BRANCH_VAR);
}

#[test]
#[serial]
fn test_env_value_treats_empty_as_unset() {
    std::env::set_var(BRANCH_VAR, "");
    assert_eq!(env_value(BRANCH_VAR), None);
    std::env::remove_var(BRANCH_VAR);
}

#[test]
#[serial]
fn test_branch_comes_from_environment() {
    std::env::set_var(BRANCH_VAR, "feature_x");
    let branch = resolve_branch(None, BRANCH_VAR, &release_branches());
    assert_eq!(branch.name, "feature_x");
    assert!(!branch.is_release_branch());
    std::env::remove_var(BRANCH_VAR);
}

#[test]
#[serial]
fn test_branch_override_beats_environment() {
    std::env::set_var(BRANCH_VAR, "feature_x");
    let branch = resolve_branch(
        Some("master".to_string()),
        BRANCH_VAR,
        &release_branches(),
    );
    assert_eq!(branch.name, "master");
    assert!(branch.is_release_branch());
    std::env::remove_var(BRANCH_VAR);
}

#[test]
#[serial]
fn test_release_classification_from_environment() {
    std::env::set_var(BRANCH_VAR, "master");
    let branch = resolve_branch(None, BRANCH_VAR, &release_branches());
    assert!(branch.is_release_branch());
    std::env::remove_var(BRANCH_VAR);
}

#[test]
#[serial]
fn test_fallback_tag_comes_from_environment() {
    std::env::set_var(TAG_VAR, "sha1-sha1");
    assert_eq!(resolve_fallback_tag(None, TAG_VAR), "sha1-sha1");
    std::env::remove_var(TAG_VAR);
}

#[test]
#[serial]
fn test_fallback_tag_override_beats_environment() {
    std::env::set_var(TAG_VAR, "sha1-sha1");
    assert_eq!(
        resolve_fallback_tag(Some("override".to_string()), TAG_VAR),
        "override"
    );
    std::env::remove_var(TAG_VAR);
}

#[test]
#[serial]
fn test_unset_fallback_tag_is_empty() {
    std::env::remove_var(TAG_VAR);
    assert_eq!(resolve_fallback_tag(None, TAG_VAR), "");
}
