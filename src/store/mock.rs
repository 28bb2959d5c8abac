use std::collections::HashMap;

use crate::error::{Result, TagResolveError};
use crate::store::ConfigStore;

/// Mock configuration store for testing without spawning processes
pub struct MockStore {
    values: HashMap<String, String>,
    failures: HashMap<String, i32>,
}

impl MockStore {
    /// Create a new empty mock store
    pub fn new() -> Self {
        MockStore {
            values: HashMap::new(),
            failures: HashMap::new(),
        }
    }

    /// Store a value under a key
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Make lookups of a key fail with the given exit code
    pub fn fail(&mut self, key: impl Into<String>, code: i32) {
        self.failures.insert(key.into(), code);
    }
}

impl Default for MockStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for MockStore {
    fn fetch(&self, key: &str) -> Result<String> {
        if let Some(code) = self.failures.get(key) {
            return Err(TagResolveError::CommandFailed {
                key: key.to_string(),
                code: *code,
            });
        }

        self.values
            .get(key)
            .cloned()
            .ok_or_else(|| TagResolveError::lookup(format!("Key not found: {}", key)))
    }
}
