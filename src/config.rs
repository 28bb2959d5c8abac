use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::TagResolveError;

/// Represents the complete configuration for tag-resolve.
///
/// Contains the release-branch list, the external lookup command settings, and the
/// environment variable names the resolver reads its inputs from.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub release: ReleaseConfig,

    #[serde(default)]
    pub lookup: LookupConfig,

    #[serde(default)]
    pub env: EnvConfig,
}

/// Returns the default list of release branches.
fn default_release_branches() -> Vec<String> {
    vec!["master".to_string()]
}

/// Configuration for release-branch classification.
///
/// Branches listed here consult the external configuration store; every other
/// branch uses the fallback tag.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReleaseConfig {
    #[serde(default = "default_release_branches")]
    pub branches: Vec<String>,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        ReleaseConfig {
            branches: default_release_branches(),
        }
    }
}

fn default_lookup_command() -> String {
    "shuttle".to_string()
}

fn default_lookup_subcommand() -> String {
    "get".to_string()
}

fn default_lookup_key() -> String {
    "docker.baseTag".to_string()
}

/// Configuration for the external configuration-lookup command.
///
/// The command is invoked as `<command> <subcommand> <key>` and is expected to
/// print the value on standard output.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LookupConfig {
    #[serde(default = "default_lookup_command")]
    pub command: String,

    #[serde(default = "default_lookup_subcommand")]
    pub subcommand: String,

    #[serde(default = "default_lookup_key")]
    pub key: String,
}

impl Default for LookupConfig {
    fn default() -> Self {
        LookupConfig {
            command: default_lookup_command(),
            subcommand: default_lookup_subcommand(),
            key: default_lookup_key(),
        }
    }
}

fn default_branch_var() -> String {
    "BRANCH_NAME".to_string()
}

fn default_tag_var() -> String {
    "tag".to_string()
}

/// Names of the environment variables the resolver reads.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct EnvConfig {
    #[serde(default = "default_branch_var")]
    pub branch_var: String,

    #[serde(default = "default_tag_var")]
    pub tag_var: String,
}

impl Default for EnvConfig {
    fn default() -> Self {
        EnvConfig {
            branch_var: default_branch_var(),
            tag_var: default_tag_var(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            release: ReleaseConfig::default(),
            lookup: LookupConfig::default(),
            env: EnvConfig::default(),
        }
    }
}

impl Config {
    /// Validates the configuration before any external command is spawned.
    ///
    /// The lookup key must be a dotted identifier (e.g. `docker.baseTag`); the
    /// value the store returns for it is never validated.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.release.branches.is_empty() {
            return Err(TagResolveError::config(
                "At least one release branch must be configured",
            ));
        }

        if self.lookup.command.trim().is_empty() {
            return Err(TagResolveError::config("Lookup command must not be empty"));
        }

        let key_pattern = regex::Regex::new(r"^[A-Za-z0-9_-]+(\.[A-Za-z0-9_-]+)*$")
            .map_err(|e| TagResolveError::config(format!("Invalid key pattern: {}", e)))?;
        if !key_pattern.is_match(&self.lookup.key) {
            return Err(TagResolveError::config(format!(
                "Lookup key '{}' is not a dotted identifier",
                self.lookup.key
            )));
        }

        Ok(())
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `tagresolve.toml` in current directory
/// 3. `~/.config/.tagresolve.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./tagresolve.toml").exists() {
        fs::read_to_string("./tagresolve.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".tagresolve.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}
