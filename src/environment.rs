//! Acquisition of the resolver's inputs from the invoking environment.
//!
//! Branch resolution order: explicit override, then the configured
//! environment variable, then the current branch of the enclosing git
//! repository, then the empty string. An empty branch name never classifies
//! as a release branch, so the fallback path is taken, matching the host
//! shell's default expansion of unset variables.

use std::env;

use git2::Repository;

use crate::domain::BranchContext;
use crate::error::{Result, TagResolveError};

/// Read an environment variable, treating the empty string as unset
pub fn env_value(var: &str) -> Option<String> {
    env::var(var).ok().filter(|v| !v.is_empty())
}

/// Current branch of the git repository enclosing the working directory.
///
/// Discovers the repository in the current directory or parent directories.
///
/// # Returns
/// * `Ok(String)` - The branch name HEAD points at
/// * `Err` - If not in a repository, or HEAD is detached
pub fn detect_git_branch() -> Result<String> {
    let repo = Repository::discover(".")?;
    let head = repo.head()?;

    if !head.is_branch() {
        return Err(TagResolveError::branch("HEAD is not on a branch"));
    }

    head.shorthand()
        .map(|name| name.to_string())
        .ok_or_else(|| TagResolveError::branch("Branch name is not valid UTF-8"))
}

/// Determine the branch to resolve for and classify it.
///
/// # Arguments
/// * `override_name` - Branch given on the command line, if any
/// * `var` - Name of the environment variable holding the CI branch
/// * `release_branches` - Configured release branches
pub fn resolve_branch(
    override_name: Option<String>,
    var: &str,
    release_branches: &[String],
) -> BranchContext {
    let name = override_name
        .or_else(|| env_value(var))
        .or_else(|| detect_git_branch().ok())
        .unwrap_or_default();

    BranchContext::new(name, release_branches)
}

/// Determine the fallback tag used off the release branches.
///
/// Falls back to the empty string, which is printed verbatim, inheriting the
/// shell's expansion rules for unset variables.
pub fn resolve_fallback_tag(override_tag: Option<String>, var: &str) -> String {
    override_tag.or_else(|| env_value(var)).unwrap_or_default()
}
