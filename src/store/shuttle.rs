use std::process::{Command, Stdio};

use crate::config::LookupConfig;
use crate::error::{Result, TagResolveError};
use crate::store::ConfigStore;

/// Configuration store backed by the external lookup command.
///
/// The command is invoked as `<command> <subcommand> <key>` once per fetch.
/// Its standard error is inherited so diagnostics reach the operator exactly
/// as they would under a shell; standard output is captured as the value.
pub struct ShuttleStore {
    command: String,
    subcommand: String,
}

impl ShuttleStore {
    /// Create a store for the given command and subcommand
    pub fn new(command: impl Into<String>, subcommand: impl Into<String>) -> Self {
        ShuttleStore {
            command: command.into(),
            subcommand: subcommand.into(),
        }
    }

    /// Create a store from the lookup section of the configuration
    pub fn from_config(config: &LookupConfig) -> Self {
        ShuttleStore::new(&config.command, &config.subcommand)
    }
}

impl ConfigStore for ShuttleStore {
    /// Run the lookup command for a key.
    ///
    /// Exit code 0 yields the captured stdout with the trailing newline
    /// trimmed. Any non-zero exit code is surfaced as
    /// [TagResolveError::CommandFailed] carrying that code; a command killed
    /// by a signal has no code and reports 1.
    fn fetch(&self, key: &str) -> Result<String> {
        let output = Command::new(&self.command)
            .arg(&self.subcommand)
            .arg(key)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| {
                TagResolveError::lookup(format!("Failed to execute {}: {}", self.command, e))
            })?;

        if !output.status.success() {
            return Err(TagResolveError::CommandFailed {
                key: key.to_string(),
                code: output.status.code().unwrap_or(1),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout.trim_end_matches('\n').to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_command_fails() {
        let store = ShuttleStore::new("/nonexistent/path/to/shuttle", "get");
        let result = store.fetch("docker.baseTag");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to execute"));
    }

    #[test]
    #[cfg(unix)]
    fn test_stdout_is_captured() {
        // `echo get docker.baseTag` stands in for a well-behaved lookup tool
        let store = ShuttleStore::new("echo", "get");
        let value = store.fetch("docker.baseTag").unwrap();
        assert_eq!(value, "get docker.baseTag");
    }

    #[test]
    #[cfg(unix)]
    fn test_nonzero_exit_is_command_failed() {
        let store = ShuttleStore::new("false", "get");
        match store.fetch("docker.baseTag") {
            Err(TagResolveError::CommandFailed { key, code }) => {
                assert_eq!(key, "docker.baseTag");
                assert_eq!(code, 1);
            }
            other => panic!("expected CommandFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_from_config_uses_lookup_section() {
        let config = LookupConfig::default();
        let store = ShuttleStore::from_config(&config);
        assert_eq!(store.command, "shuttle");
        assert_eq!(store.subcommand, "get");
    }
}
