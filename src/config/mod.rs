//! Configuration management for the key-value state machine.
//!
//! Provides hierarchical configuration loading and validation with:
//! - Default values as code base
//! - Configuration file support
//! - Environment variable overrides
mod snapshot;
pub use snapshot::*;


use std::env;
use std::fmt::Debug;

use config::Config;
use config::Environment;
use config::File;
use serde::Deserialize;
use serde::Serialize;

use crate::constants::CONFIG_ENV_PREFIX;
use crate::constants::CONFIG_PATH_ENV;
use crate::Result;

/// Main configuration container for the state machine
///
/// Sources are merged with hierarchical override support:
/// 1. Default values from code implementation
/// 2. Configuration file specified by `KV_FSM_CONFIG_PATH`
/// 3. Environment variables with `KV_FSM__` prefix (highest priority)
#[derive(Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct FsmConfig {
    /// Snapshot persist/restore parameters
    #[serde(default)]
    pub snapshot: SnapshotConfig,
}

impl Debug for FsmConfig {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.debug_struct("FsmConfig").field("snapshot", &self.snapshot).finish()
    }
}

impl FsmConfig {
    /// Loads configuration from hierarchical sources without validation.
    ///
    /// Callers MUST call `validate()` once all overrides are applied.
    ///
    /// # Examples
    /// ```ignore
    /// std::env::set_var("KV_FSM__SNAPSHOT__WRITE_BUFFER_SIZE", "4096");
    /// let cfg = FsmConfig::new()?.validate()?;
    /// ```
    pub fn new() -> Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        if let Ok(config_path) = env::var(CONFIG_PATH_ENV) {
            builder = builder.add_source(File::with_name(&config_path).required(true));
        }

        let config: Self = builder.add_source(env_source()).build()?.try_deserialize()?;
        Ok(config)
    }

    /// Applies additional configuration overrides from file without validation.
    ///
    /// Merging order (later sources override earlier):
    /// 1. Current configuration values
    /// 2. New configuration file
    /// 3. Latest environment variables (highest priority)
    pub fn with_override_config(
        &self,
        path: &str,
    ) -> Result<Self> {
        let config: Self = Config::builder()
            .add_source(Config::try_from(self)?)
            .add_source(File::with_name(path))
            .add_source(env_source())
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    /// Validates configuration and returns validated instance.
    pub fn validate(self) -> Result<Self> {
        self.snapshot.validate()?;
        Ok(self)
    }
}

fn env_source() -> Environment {
    Environment::with_prefix(CONFIG_ENV_PREFIX)
        .separator("__")
        .ignore_empty(true)
        .try_parsing(true)
}
