//! Configuration management for the file tree server
//!
//! Values are layered: built-in defaults, then an optional `config.toml`,
//! then `FILETREE_*` environment overrides. Everything here is read once at
//! startup; changing it requires a restart.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 1234;
pub const DEFAULT_STORAGE_ROOT: &str = "storage";
pub const DEFAULT_MAX_TREE_DEPTH: usize = 64;

const ENV_PREFIX: &str = "FILETREE";

/// Complete server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// IP address the HTTP listener binds to
    /// Environment: FILETREE_BIND_ADDRESS
    pub bind_address: String,

    /// Port for the HTTP listener
    /// Environment: FILETREE_PORT
    pub port: u16,

    /// Directory exposed through the API, created if absent
    /// Environment: FILETREE_STORAGE_ROOT
    pub storage_root: String,

    /// Deepest directory level that is expanded when listing the tree
    /// Environment: FILETREE_MAX_TREE_DEPTH
    pub max_tree_depth: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            storage_root: DEFAULT_STORAGE_ROOT.to_string(),
            max_tree_depth: DEFAULT_MAX_TREE_DEPTH,
        }
    }
}

impl ServerConfig {
    /// Load configuration from ./config.toml (if present) with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from the given file stem, e.g. `"config"` for `config.toml`.
    /// A missing file is not an error; defaults fill the gaps.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .set_default("bind_address", DEFAULT_BIND_ADDRESS)?
            .set_default("port", i64::from(DEFAULT_PORT))?
            .set_default("storage_root", DEFAULT_STORAGE_ROOT)?
            .set_default("max_tree_depth", DEFAULT_MAX_TREE_DEPTH as i64)?
            .add_source(File::with_name(config_path).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        let config: ServerConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.port == 0 {
            return Err(config::ConfigError::Message("port cannot be 0".into()));
        }

        if self.bind_address.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "bind_address cannot be empty".into(),
            ));
        }

        if self.storage_root.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "storage_root cannot be empty".into(),
            ));
        }

        if self.max_tree_depth == 0 {
            return Err(config::ConfigError::Message(
                "max_tree_depth must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Bind address and port as a socket address string
    pub fn socket_address(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }

    /// Storage root as PathBuf
    pub fn storage_root_path(&self) -> PathBuf {
        PathBuf::from(&self.storage_root)
    }
}
