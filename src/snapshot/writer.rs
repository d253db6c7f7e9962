use std::io::BufWriter;
use std::io::Write;

use crate::constants::SNAPSHOT_VERSION_V1;
use crate::Result;
use crate::SnapshotError;

/// Counters reported once a snapshot stream is complete
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SnapshotSummary {
    pub records: u64,
    pub bytes: u64,
}

/// Streams the snapshot layout into a buffered sink:
///
/// ```text
/// version(1) | config_len(4) config | { key_len(4) key val_len(4) val }*
/// ```
///
/// All lengths are big-endian `u32`.
pub struct SnapshotWriter<W: Write> {
    sink: BufWriter<W>,
    summary: SnapshotSummary,
}

impl<W: Write> SnapshotWriter<W> {
    pub fn with_capacity(
        capacity: usize,
        sink: W,
    ) -> Self {
        Self {
            sink: BufWriter::with_capacity(capacity, sink),
            summary: SnapshotSummary::default(),
        }
    }

    /// Writes the version byte followed by the length-prefixed configuration
    pub fn write_header(
        &mut self,
        configuration: &[u8],
    ) -> Result<()> {
        self.write_all(&[SNAPSHOT_VERSION_V1])?;
        self.write_field("configuration", configuration)
    }

    pub fn write_record(
        &mut self,
        key: &str,
        value: &str,
    ) -> Result<()> {
        self.write_field("key", key.as_bytes())?;
        self.write_field("value", value.as_bytes())?;
        self.summary.records += 1;
        Ok(())
    }

    /// Flushes buffered output; the snapshot is complete only once this returns.
    pub fn finish(mut self) -> Result<SnapshotSummary> {
        self.sink.flush()?;
        Ok(self.summary)
    }

    fn write_field(
        &mut self,
        field: &'static str,
        bytes: &[u8],
    ) -> Result<()> {
        let len = u32::try_from(bytes.len()).map_err(|_| SnapshotError::FieldTooLarge {
            field,
            len: bytes.len(),
        })?;
        self.write_all(&len.to_be_bytes())?;
        self.write_all(bytes)
    }

    fn write_all(
        &mut self,
        buf: &[u8],
    ) -> Result<()> {
        self.sink.write_all(buf)?;
        self.summary.bytes += buf.len() as u64;
        Ok(())
    }
}

