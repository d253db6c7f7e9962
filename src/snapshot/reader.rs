use std::io::BufReader;
use std::io::ErrorKind;
use std::io::Read;

use crate::constants::LENGTH_PREFIX_SIZE;
use crate::constants::SNAPSHOT_VERSION_V1;
use crate::Result;
use crate::SnapshotError;

// Upper bound on the up-front allocation for a declared field length.
// Larger fields still load, the buffer just grows as bytes arrive.
const MAX_PREALLOCATION: usize = 1024 * 1024;

/// Parses the layout produced by [`super::SnapshotWriter`].
///
/// End of stream is only accepted before a key length prefix; anywhere else
/// it is reported as [`SnapshotError::Truncated`].
pub struct SnapshotReader<R: Read> {
    stream: BufReader<R>,
    records: u64,
}

impl<R: Read> SnapshotReader<R> {
    pub fn with_capacity(
        capacity: usize,
        stream: R,
    ) -> Self {
        Self {
            stream: BufReader::with_capacity(capacity, stream),
            records: 0,
        }
    }

    /// Reads and checks the version marker
    pub fn read_version(&mut self) -> Result<u8> {
        let mut version = [0u8; 1];
        if self.fill(&mut version)? == 0 {
            return Err(SnapshotError::MissingVersion.into());
        }
        match version[0] {
            SNAPSHOT_VERSION_V1 => Ok(version[0]),
            other => Err(SnapshotError::UnsupportedVersion(other).into()),
        }
    }

    /// Reads the length-prefixed configuration section, undecoded
    pub fn read_configuration(&mut self) -> Result<Vec<u8>> {
        let len = self.read_len("configuration length")?.ok_or(SnapshotError::Truncated {
            section: "configuration length",
            expected: LENGTH_PREFIX_SIZE,
            actual: 0,
        })?;
        self.read_body("configuration", len)
    }

    /// Next `(key, value)` record, or `None` at a clean end of stream
    pub fn next_record(&mut self) -> Result<Option<(String, String)>> {
        let key_len = match self.read_len("key length")? {
            Some(len) => len,
            None => return Ok(None),
        };
        let key = into_string("key", self.read_body("key", key_len)?)?;

        let value_len = self.read_len("value length")?.ok_or(SnapshotError::Truncated {
            section: "value length",
            expected: LENGTH_PREFIX_SIZE,
            actual: 0,
        })?;
        let value = into_string("value", self.read_body("value", value_len)?)?;

        self.records += 1;
        Ok(Some((key, value)))
    }

    /// Number of records returned so far
    pub fn records(&self) -> u64 {
        self.records
    }

    /// `None` only if the stream ended before the first byte of the prefix
    fn read_len(
        &mut self,
        section: &'static str,
    ) -> Result<Option<u32>> {
        let mut buf = [0u8; LENGTH_PREFIX_SIZE];
        match self.fill(&mut buf)? {
            0 => Ok(None),
            LENGTH_PREFIX_SIZE => Ok(Some(u32::from_be_bytes(buf))),
            actual => Err(SnapshotError::Truncated {
                section,
                expected: LENGTH_PREFIX_SIZE,
                actual,
            }
            .into()),
        }
    }

    fn read_body(
        &mut self,
        section: &'static str,
        len: u32,
    ) -> Result<Vec<u8>> {
        let expected = len as usize;
        let mut body = Vec::with_capacity(expected.min(MAX_PREALLOCATION));
        (&mut self.stream).take(len as u64).read_to_end(&mut body)?;
        if body.len() != expected {
            return Err(SnapshotError::Truncated {
                section,
                expected,
                actual: body.len(),
            }
            .into());
        }
        Ok(body)
    }

    /// Reads until `buf` is full or the stream ends; returns bytes read.
    fn fill(
        &mut self,
        buf: &mut [u8],
    ) -> Result<usize> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.stream.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        Ok(filled)
    }
}

fn into_string(
    field: &'static str,
    bytes: Vec<u8>,
) -> Result<String> {
    String::from_utf8(bytes).map_err(|_| SnapshotError::InvalidUtf8 { field }.into())
}
