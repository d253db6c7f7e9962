// -
// Snapshot wire format

/// Version marker written as the first byte of every snapshot ('1')
pub const SNAPSHOT_VERSION_V1: u8 = b'1';

/// Width of every length prefix in the snapshot stream (big-endian u32)
pub(crate) const LENGTH_PREFIX_SIZE: usize = 4;

/// Largest key or value that fits a length prefix
pub const MAX_FIELD_LEN: usize = u32::MAX as usize;

// -
// Configuration tracking

/// Number of most recent cluster configurations kept by the state machine
pub const MAX_RETAINED_CONFIGURATIONS: usize = 2;

// -
// Settings

pub(crate) const CONFIG_PATH_ENV: &str = "KV_FSM_CONFIG_PATH";
pub(crate) const CONFIG_ENV_PREFIX: &str = "KV_FSM";
