//! StateMachine
//!
//! The narrow surface a consensus engine drives:
//! - Applying committed log entries to the state machine
//! - Capturing a snapshot handle and persisting it to a sink
//! - Restoring the state machine from a snapshot stream
//! - Recording cluster membership changes

use std::io::Read;
use std::io::Write;

use crate::ApplyError;
use crate::ClusterConfiguration;
use crate::Result;

/// One committed log entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    pub index: u64,
    pub term: u64,
    /// Opaque command payload
    pub command: Vec<u8>,
}

impl Entry {
    pub fn new(
        index: u64,
        term: u64,
        command: Vec<u8>,
    ) -> Self {
        Self {
            index,
            term,
            command,
        }
    }
}

pub trait StateMachine: Send + Sync + 'static {
    type Snapshot: StateMachineSnapshot;

    /// Applies one committed entry.
    ///
    /// Called strictly sequentially in commit order. A rejected entry leaves
    /// the state machine untouched.
    fn apply(
        &self,
        entry: &Entry,
    ) -> std::result::Result<(), ApplyError>;

    /// Apply log entries in chunks, one result per entry
    fn apply_chunk(
        &self,
        chunk: Vec<Entry>,
    ) -> Vec<std::result::Result<(), ApplyError>> {
        chunk.iter().map(|entry| self.apply(entry)).collect()
    }

    /// Returns a handle that captures state only when persisted.
    ///
    /// May be called from a different thread than `apply`.
    fn snapshot(&self) -> Result<Self::Snapshot>;

    /// Replaces the whole state with the contents of `stream`.
    ///
    /// The caller guarantees no `apply` runs concurrently.
    fn restore(
        &self,
        stream: &mut dyn Read,
    ) -> Result<()>;

    fn store_configuration(
        &self,
        index: u64,
        configuration: ClusterConfiguration,
    );
}

pub trait StateMachineSnapshot: Send + Sync {
    /// Streams the captured state into `sink` and flushes it.
    ///
    /// On error the sink may hold partial output; discarding it is up to the
    /// caller.
    fn persist(
        &self,
        sink: &mut dyn Write,
    ) -> Result<()>;

    fn release(&mut self) {}
}
