use std::fmt;

/// Where a resolved tag came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagSource {
    /// The fallback tag supplied by the invoking environment
    Fallback,
    /// The external configuration store
    Store,
}

impl fmt::Display for TagSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagSource::Fallback => write!(f, "environment fallback"),
            TagSource::Store => write!(f, "configuration store"),
        }
    }
}

/// A resolved Docker image tag.
///
/// The value is an opaque string; the resolver never inspects or validates its
/// format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTag {
    pub value: String,
    pub source: TagSource,
}

impl ResolvedTag {
    /// Create a resolved tag from a string and its source
    pub fn new(value: impl Into<String>, source: TagSource) -> Self {
        ResolvedTag {
            value: value.into(),
            source,
        }
    }
}
