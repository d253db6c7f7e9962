//! State Machine Error Hierarchy
//!
//! Errors are split by the layer that raises them: local validation of a
//! single log entry (`ApplyError`), infrastructure failures while streaming a
//! snapshot (`StorageError`, `SerializationError`), and configuration loading.

use config::ConfigError;

#[doc(hidden)]
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Infrastructure-level failures (storage, serialization)
    #[error(transparent)]
    System(#[from] SystemError),

    /// Configuration loading and validation failures
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A single log entry was rejected by the state machine
    #[error(transparent)]
    Apply(#[from] ApplyError),
}

/// Result of applying one committed entry.
///
/// Recovered locally: the entry is rejected and the store is left untouched.
/// The consensus layer attaches it to the completion signal of that log index.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApplyError {
    #[error("key size over flow: {len} bytes exceeds the 32-bit length field")]
    KeySizeOverflow { len: usize },

    #[error("value size over flow: {len} bytes exceeds the 32-bit length field")]
    ValueSizeOverflow { len: usize },

    /// Payload is not a `[key, value, reserved]` command
    #[error("malformed entry payload: {0}")]
    MalformedEntry(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SystemError {
    // Storage layer
    #[error("Storage operation failed")]
    Storage(#[from] StorageError),

    //Serialization
    #[error("Serialization error")]
    Serialization(#[from] SerializationError),
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Sink or stream I/O failures during persist/restore
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    /// Snapshot stream does not follow the expected layout
    #[error("Snapshot operation failed: {0}")]
    Snapshot(#[from] SnapshotError),
}

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The stream ended before the version marker
    #[error("snapshot stream is empty: missing version byte")]
    MissingVersion,

    #[error("unsupported snapshot version byte: {0:#04x}")]
    UnsupportedVersion(u8),

    /// Partial length field or a body shorter than its declared length
    #[error("truncated {section}: expected {expected} bytes, got {actual}")]
    Truncated {
        section: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Length does not fit the 32-bit length prefix
    #[error("{field} of {len} bytes does not fit a 32-bit length prefix")]
    FieldTooLarge { field: &'static str, len: usize },

    #[error("{field} is not valid UTF-8")]
    InvalidUtf8 { field: &'static str },

    #[error("configuration section could not be decoded: {0}")]
    CorruptConfiguration(String),
}

// Serialization is classified separately (entry payloads and snapshot sections)
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    #[error("Bincode serialization failed: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("Json serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

// ============== Conversion Implementations ============== //
impl From<StorageError> for Error {
    fn from(e: StorageError) -> Self {
        Error::System(SystemError::Storage(e))
    }
}

impl From<SnapshotError> for Error {
    fn from(e: SnapshotError) -> Self {
        Error::System(SystemError::Storage(StorageError::Snapshot(e)))
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::System(SystemError::Storage(StorageError::IoError(e)))
    }
}

impl From<SerializationError> for Error {
    fn from(e: SerializationError) -> Self {
        Error::System(SystemError::Serialization(e))
    }
}

impl From<bincode::Error> for Error {
    fn from(e: bincode::Error) -> Self {
        SerializationError::Bincode(e).into()
    }
}

impl Error {
    /// Returns the snapshot layout error, if that is what failed.
    pub fn as_snapshot_error(&self) -> Option<&SnapshotError> {
        match self {
            Error::System(SystemError::Storage(StorageError::Snapshot(e))) => Some(e),
            _ => None,
        }
    }

    /// Returns the underlying I/O error, if that is what failed.
    pub fn as_io_error(&self) -> Option<&std::io::Error> {
        match self {
            Error::System(SystemError::Storage(StorageError::IoError(e))) => Some(e),
            _ => None,
        }
    }
}
