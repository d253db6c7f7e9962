use std::io::Read;
use std::io::Write;
use std::sync::Arc;

use tracing::debug;
use tracing::error;
use tracing::trace;
use tracing::warn;

use super::KvCommand;
use super::kv_store::KvMap;
use super::KvStore;
use crate::constants::MAX_FIELD_LEN;
use crate::ApplyError;
use crate::ClusterConfiguration;
use crate::ConfigurationTracker;
use crate::Entry;
use crate::FsmConfig;
use crate::Result;
use crate::SnapshotConfig;
use crate::SnapshotError;
use crate::SnapshotReader;
use crate::SnapshotSummary;
use crate::SnapshotWriter;
use crate::StateMachine;
use crate::StateMachineSnapshot;

/// In-memory key-value state machine with compact length-prefixed snapshots
#[derive(Debug, Default)]
pub struct KvStateMachine {
    store: Arc<KvStore>,
    configurations: Arc<ConfigurationTracker>,
    config: SnapshotConfig,
}

/// Snapshot handle bound to one [`KvStateMachine`].
///
/// Nothing is copied at creation: contents are read from the live store when
/// [`StateMachineSnapshot::persist`] runs.
#[derive(Debug, Clone)]
pub struct KvSnapshot {
    store: Arc<KvStore>,
    configurations: Arc<ConfigurationTracker>,
    config: SnapshotConfig,
}

impl KvStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// `config` is expected to be validated already
    pub fn with_config(config: FsmConfig) -> Self {
        Self {
            config: config.snapshot,
            ..Default::default()
        }
    }

    pub fn get(
        &self,
        key: &str,
    ) -> Option<String> {
        self.store.get(key)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn store(&self) -> &KvStore {
        &self.store
    }

    /// Retained cluster configurations, oldest first
    pub fn configurations(&self) -> Vec<ClusterConfiguration> {
        self.configurations.configurations()
    }

    pub fn latest_configuration(&self) -> Option<ClusterConfiguration> {
        self.configurations.latest()
    }

    fn restore_from(
        &self,
        stream: &mut dyn Read,
    ) -> Result<u64> {
        let mut reader = SnapshotReader::with_capacity(self.config.read_buffer_size, stream);
        reader.read_version()?;

        let configuration = match ConfigurationTracker::decode(&reader.read_configuration()?) {
            Ok(configuration) => configuration,
            Err(e) if self.config.tolerate_corrupt_configuration => {
                warn!("Ignoring undecodable configuration section in snapshot: {:?}", e);
                None
            }
            Err(e) => return Err(SnapshotError::CorruptConfiguration(e.to_string()).into()),
        };

        let fresh = KvMap::new();
        while let Some((key, value)) = reader.next_record()? {
            fresh.insert(key, value);
        }

        // Install only once the whole stream parsed
        self.store.replace(fresh);
        if let Some(configuration) = configuration {
            self.configurations.push(configuration);
        }
        Ok(reader.records())
    }
}

/// Rejects fields that cannot be framed by a 32-bit length prefix
pub fn validate_command(
    key_len: usize,
    value_len: usize,
) -> std::result::Result<(), ApplyError> {
    if key_len > MAX_FIELD_LEN {
        return Err(ApplyError::KeySizeOverflow { len: key_len });
    }
    if value_len > MAX_FIELD_LEN {
        return Err(ApplyError::ValueSizeOverflow { len: value_len });
    }
    Ok(())
}

impl StateMachine for KvStateMachine {
    type Snapshot = KvSnapshot;

    fn apply(
        &self,
        entry: &Entry,
    ) -> std::result::Result<(), ApplyError> {
        let KvCommand { key, value } = KvCommand::decode(&entry.command).inspect_err(|e| {
            warn!("Rejecting entry at index {}: {}", entry.index, e);
        })?;

        validate_command(key.len(), value.len()).inspect_err(|e| {
            warn!("Rejecting entry at index {}: {}", entry.index, e);
        })?;

        trace!("Applying SET at index {}: {:?}", entry.index, key);
        self.store.insert(key, value);
        Ok(())
    }

    fn snapshot(&self) -> Result<KvSnapshot> {
        Ok(KvSnapshot {
            store: self.store.clone(),
            configurations: self.configurations.clone(),
            config: self.config.clone(),
        })
    }

    fn restore(
        &self,
        stream: &mut dyn Read,
    ) -> Result<()> {
        match self.restore_from(stream) {
            Ok(records) => {
                debug!("Restored {} records from snapshot", records);
                Ok(())
            }
            Err(e) => {
                error!("Restore from snapshot failed: {:?}", e);
                Err(e)
            }
        }
    }

    fn store_configuration(
        &self,
        index: u64,
        configuration: ClusterConfiguration,
    ) {
        self.configurations.store(index, configuration);
    }
}

impl KvSnapshot {
    fn write_to(
        &self,
        sink: &mut dyn Write,
    ) -> Result<SnapshotSummary> {
        let mut writer = SnapshotWriter::with_capacity(self.config.write_buffer_size, sink);
        writer.write_header(&self.configurations.encode_latest()?)?;

        let live = self.store.live();
        for entry in live.iter() {
            writer.write_record(entry.key(), entry.value())?;
        }
        writer.finish()
    }
}

impl StateMachineSnapshot for KvSnapshot {
    fn persist(
        &self,
        sink: &mut dyn Write,
    ) -> Result<()> {
        match self.write_to(sink) {
            Ok(summary) => {
                debug!(
                    "Persisted snapshot: {} records, {} bytes",
                    summary.records, summary.bytes
                );
                Ok(())
            }
            Err(e) => {
                error!("Persist snapshot failed: {:?}", e);
                Err(e)
            }
        }
    }
}
