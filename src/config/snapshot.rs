use config::ConfigError;
use serde::Deserialize;
use serde::Serialize;

use crate::Error;
use crate::Result;

/// Buffering and tolerance settings for snapshot persist/restore
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SnapshotConfig {
    /// Capacity (in bytes) of the buffered writer wrapping the persist sink.
    /// The buffer is always flushed before persist returns.
    #[serde(default = "default_write_buffer_size")]
    pub write_buffer_size: usize,

    /// Capacity (in bytes) of the buffered reader wrapping the restore stream
    #[serde(default = "default_read_buffer_size")]
    pub read_buffer_size: usize,

    /// When true, a configuration section that fails to decode is logged and
    /// skipped instead of failing the restore. Key/value records are still
    /// restored either way.
    #[serde(default)]
    pub tolerate_corrupt_configuration: bool,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            write_buffer_size: default_write_buffer_size(),
            read_buffer_size: default_read_buffer_size(),
            tolerate_corrupt_configuration: false,
        }
    }
}

impl SnapshotConfig {
    pub(super) fn validate(&self) -> Result<()> {
        if self.write_buffer_size == 0 {
            return Err(Error::Config(ConfigError::Message(
                "write_buffer_size must be greater than 0".into(),
            )));
        }

        if self.read_buffer_size == 0 {
            return Err(Error::Config(ConfigError::Message(
                "read_buffer_size must be greater than 0".into(),
            )));
        }

        Ok(())
    }
}

// 64KB
fn default_write_buffer_size() -> usize {
    64 * 1024
}
fn default_read_buffer_size() -> usize {
    64 * 1024
}
