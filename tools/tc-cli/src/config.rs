//! # Client Configuration
//!
//! Layers, lowest to highest precedence:
//!
//! 1. built-in defaults
//! 2. TOML file (`--config`)
//! 3. environment (`TC_NODE_HOST`, `TC_NODE_PORT`, `TC_TICK_OFFSET`, `TC_SEED`)
//! 4. command-line flags
//!
//! The seed is never read from a file.
//!
//! ```toml
//! [node]
//! host = "127.0.0.1"
//! port = 21841
//! connect_timeout_secs = 5
//! read_timeout_secs = 5
//! write_timeout_secs = 5
//!
//! [transaction]
//! tick_offset = 20
//! ```

use crate::cli::GlobalArgs;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tc_01_call_engine::SessionTimeouts;
use thiserror::Error;

/// Node host override.
pub const ENV_NODE_HOST: &str = "TC_NODE_HOST";
/// Node port override.
pub const ENV_NODE_PORT: &str = "TC_NODE_PORT";
/// Scheduled-tick offset override.
pub const ENV_TICK_OFFSET: &str = "TC_TICK_OFFSET";
/// Signing seed.
pub const ENV_SEED: &str = "TC_SEED";

/// Errors that can occur during config loading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// File I/O error.
    #[error("Failed to read config file {path}: {error}")]
    Io {
        /// Path of the file that failed to load.
        path: String,
        /// Error message from the I/O operation.
        error: String,
    },

    /// TOML parse error.
    #[error("Failed to parse config: {0}")]
    Parse(String),

    /// A value parsed but is unusable.
    #[error("Invalid value for {key}: {reason}")]
    Invalid {
        /// Setting name
        key: String,
        /// What is wrong with it
        reason: String,
    },
}

impl ConfigError {
    fn invalid(key: &str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

/// Node connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeConfig {
    /// Host name or IP.
    pub host: String,
    /// TCP port.
    pub port: u16,
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Read timeout in seconds.
    pub read_timeout_secs: u64,
    /// Write timeout in seconds.
    pub write_timeout_secs: u64,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 21841,
            connect_timeout_secs: 5,
            read_timeout_secs: 5,
            write_timeout_secs: 5,
        }
    }
}

/// Transaction defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionConfig {
    /// Ticks between the current tick and the scheduled one.
    pub tick_offset: u32,
}

impl Default for TransactionConfig {
    fn default() -> Self {
        Self { tick_offset: 20 }
    }
}

/// Resolved client configuration.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Node connection.
    pub node: NodeConfig,
    /// Transaction defaults.
    pub transaction: TransactionConfig,
    /// Signing seed, from the environment or `--seed` only.
    pub seed: Option<String>,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("node", &self.node)
            .field("transaction", &self.transaction)
            .field("seed", &self.seed.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    node: NodeSection,
    #[serde(default)]
    transaction: TransactionSection,
}

#[derive(Debug, Deserialize, Default)]
struct NodeSection {
    host: Option<String>,
    port: Option<u16>,
    connect_timeout_secs: Option<u64>,
    read_timeout_secs: Option<u64>,
    write_timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize, Default)]
struct TransactionSection {
    tick_offset: Option<u32>,
}

impl ClientConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::parse(&content)
    }

    /// Parse configuration from a TOML string, filling gaps with defaults.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        let defaults = Self::default();
        let node = file.node;
        let config = Self {
            node: NodeConfig {
                host: node.host.unwrap_or(defaults.node.host),
                port: node.port.unwrap_or(defaults.node.port),
                connect_timeout_secs: node
                    .connect_timeout_secs
                    .unwrap_or(defaults.node.connect_timeout_secs),
                read_timeout_secs: node
                    .read_timeout_secs
                    .unwrap_or(defaults.node.read_timeout_secs),
                write_timeout_secs: node
                    .write_timeout_secs
                    .unwrap_or(defaults.node.write_timeout_secs),
            },
            transaction: TransactionConfig {
                tick_offset: file
                    .transaction
                    .tick_offset
                    .unwrap_or(defaults.transaction.tick_offset),
            },
            seed: None,
        };
        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides read through `lookup`.
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_NODE_HOST) {
            self.node.host = host;
        }
        if let Some(port) = lookup(ENV_NODE_PORT) {
            self.node.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::invalid(ENV_NODE_PORT, format!("'{}' is not a port", port)))?;
        }
        if let Some(offset) = lookup(ENV_TICK_OFFSET) {
            self.transaction.tick_offset = offset.trim().parse().map_err(|_| {
                ConfigError::invalid(ENV_TICK_OFFSET, format!("'{}' is not a tick count", offset))
            })?;
        }
        if let Some(seed) = lookup(ENV_SEED) {
            self.seed = Some(seed);
        }
        Ok(())
    }

    /// Apply command-line overrides.
    pub fn apply_args(&mut self, args: &GlobalArgs) {
        if let Some(host) = &args.host {
            self.node.host = host.clone();
        }
        if let Some(port) = args.port {
            self.node.port = port;
        }
        if let Some(offset) = args.tick_offset {
            self.transaction.tick_offset = offset;
        }
        if let Some(seed) = &args.seed {
            self.seed = Some(seed.clone());
        }
    }

    /// Resolve all layers, reading the process environment.
    pub fn resolve(args: &GlobalArgs) -> Result<Self, ConfigError> {
        Self::resolve_with(args, |key| std::env::var(key).ok())
    }

    /// Resolve all layers with an injected environment.
    pub fn resolve_with<F>(args: &GlobalArgs, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_env_with(lookup)?;
        config.apply_args(args);
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that cannot work.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.node.host.trim().is_empty() {
            return Err(ConfigError::invalid("node.host", "empty"));
        }
        if self.node.port == 0 {
            return Err(ConfigError::invalid("node.port", "must be non-zero"));
        }
        let timeouts = [
            ("node.connect_timeout_secs", self.node.connect_timeout_secs),
            ("node.read_timeout_secs", self.node.read_timeout_secs),
            ("node.write_timeout_secs", self.node.write_timeout_secs),
        ];
        for (key, secs) in timeouts {
            if secs == 0 {
                return Err(ConfigError::invalid(key, "must be at least 1 second"));
            }
        }
        Ok(())
    }

    /// Socket timeouts for the node session.
    pub fn timeouts(&self) -> SessionTimeouts {
        SessionTimeouts {
            connect: Duration::from_secs(self.node.connect_timeout_secs),
            read: Duration::from_secs(self.node.read_timeout_secs),
            write: Duration::from_secs(self.node.write_timeout_secs),
        }
    }
}
