use thiserror::Error;

/// Unified error type for tag-resolve operations
#[derive(Error, Debug)]
pub enum TagResolveError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Branch detection failed: {0}")]
    Branch(String),

    #[error("Lookup failed: {0}")]
    Lookup(String),

    #[error("Lookup of '{key}' failed with exit code {code}")]
    CommandFailed { key: String, code: i32 },

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in tag-resolve
pub type Result<T> = std::result::Result<T, TagResolveError>;

impl TagResolveError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        TagResolveError::Config(msg.into())
    }

    /// Create a branch-detection error with context
    pub fn branch(msg: impl Into<String>) -> Self {
        TagResolveError::Branch(msg.into())
    }

    /// Create a lookup error with context
    pub fn lookup(msg: impl Into<String>) -> Self {
        TagResolveError::Lookup(msg.into())
    }

    /// Exit code to report for this error.
    ///
    /// `CommandFailed` forwards the lookup command's own code; everything
    /// else maps to the conventional failure code 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            TagResolveError::CommandFailed { code, .. } => *code,
            _ => 1,
        }
    }
}
