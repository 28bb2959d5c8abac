//! Core branch-conditional tag resolution.

use crate::domain::{BranchContext, ResolvedTag, TagSource};
use crate::error::Result;
use crate::store::ConfigStore;

/// Inputs for one tag resolution
///
/// Plain data, decoupled from clap, so the resolution can be driven
/// programmatically and from tests.
#[derive(Debug, Clone)]
pub struct ResolveRequest {
    /// The branch the CI build runs on
    pub branch: BranchContext,

    /// Tag to emit on non-release branches
    pub fallback_tag: String,

    /// Dotted key requested from the configuration store
    pub key: String,
}

/// Resolve the Docker image tag for a branch.
///
/// Non-release branches return the fallback tag verbatim, even when it is
/// empty. Release branches fetch the configured key from the store; store
/// failures propagate unchanged, with no retries.
pub fn resolve(request: &ResolveRequest, store: &dyn ConfigStore) -> Result<ResolvedTag> {
    if !request.branch.is_release_branch() {
        return Ok(ResolvedTag::new(
            request.fallback_tag.clone(),
            TagSource::Fallback,
        ));
    }

    let value = store.fetch(&request.key)?;
    Ok(ResolvedTag::new(value, TagSource::Store))
}
