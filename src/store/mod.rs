//! Configuration store abstraction layer
//!
//! This module provides a trait-based abstraction over the external
//! configuration store, allowing for multiple implementations including the
//! real lookup command and mock implementations for testing.
//!
//! # Overview
//!
//! The primary abstraction is the [ConfigStore] trait, which defines the one
//! operation tag-resolve needs. The concrete implementations include:
//!
//! - [shuttle::ShuttleStore]: spawns the real lookup command (`shuttle get`)
//! - [mock::MockStore]: an in-memory implementation for testing
//!
//! # Usage
//!
//! Most code should depend on the [ConfigStore] trait rather than concrete
//! implementations to enable easy testing and flexibility.
//!
//! ```rust
//! use tag_resolve::store::{ConfigStore, MockStore};
//!
//! let mut store = MockStore::new();
//! store.set("docker.baseTag", "v1.2.3");
//! assert_eq!(store.fetch("docker.baseTag").unwrap(), "v1.2.3");
//! ```

pub mod mock;
pub mod shuttle;

pub use mock::MockStore;
pub use shuttle::ShuttleStore;

use crate::error::Result;

/// Common configuration-store trait for abstraction
///
/// The store contract is deliberately narrow: given a dotted key, return the
/// value the store holds for it. The value is returned as-is; tag-resolve
/// never validates its format.
///
/// ## Thread Safety
///
/// All implementors must be `Send + Sync` to allow safe sharing across threads.
///
/// ## Error Handling
///
/// All methods return [crate::error::Result<T>]. Implementations should map
/// underlying failures to the appropriate [crate::error::TagResolveError]
/// variants; a lookup command that ran but exited nonzero maps to
/// [crate::error::TagResolveError::CommandFailed] so the caller can forward
/// the exit code.
pub trait ConfigStore: Send + Sync {
    /// Fetch the value stored under a dotted key
    ///
    /// # Arguments
    /// * `key` - The dotted key (e.g., "docker.baseTag")
    ///
    /// # Returns
    /// * `Ok(String)` - The stored value, trailing newline trimmed
    /// * `Err` - If the store cannot be reached or the lookup fails
    fn fetch(&self, key: &str) -> Result<String>;
}
