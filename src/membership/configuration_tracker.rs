use std::collections::VecDeque;

use parking_lot::RwLock;
use tracing::debug;

use super::ClusterConfiguration;
use crate::constants::MAX_RETAINED_CONFIGURATIONS;

/// Keeps the most recently seen cluster configurations, oldest first.
///
/// Only the last one is ever written into a snapshot; the one before it is
/// retained so a pending membership change can still be inspected.
#[derive(Debug, Default)]
pub struct ConfigurationTracker {
    configurations: RwLock<VecDeque<ClusterConfiguration>>,
}

impl ConfigurationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `configuration`, discarding the oldest entries beyond
    /// `MAX_RETAINED_CONFIGURATIONS`.
    ///
    /// `index` is the log index the change was committed at. It is not used to
    /// order configurations: callers deliver them in commit order.
    pub fn store(
        &self,
        index: u64,
        configuration: ClusterConfiguration,
    ) {
        let retained = self.push(configuration);
        debug!(
            "stored cluster configuration at index {}, retained={}",
            index, retained
        );
    }

    /// Appends and trims; returns how many configurations are now retained.
    pub(crate) fn push(
        &self,
        configuration: ClusterConfiguration,
    ) -> usize {
        let mut configurations = self.configurations.write();
        configurations.push_back(configuration);
        while configurations.len() > MAX_RETAINED_CONFIGURATIONS {
            configurations.pop_front();
        }
        configurations.len()
    }

    pub fn latest(&self) -> Option<ClusterConfiguration> {
        self.configurations.read().back().cloned()
    }

    /// All retained configurations, oldest first
    pub fn configurations(&self) -> Vec<ClusterConfiguration> {
        self.configurations.read().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.configurations.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Serializes the latest configuration for the snapshot header.
    ///
    /// `None` is encoded when no configuration was ever recorded.
    pub(crate) fn encode_latest(&self) -> bincode::Result<Vec<u8>> {
        let configurations = self.configurations.read();
        bincode::serialize(&configurations.back())
    }

    /// Inverse of [`Self::encode_latest`]
    pub(crate) fn decode(bytes: &[u8]) -> bincode::Result<Option<ClusterConfiguration>> {
        bincode::deserialize(bytes)
    }
}
