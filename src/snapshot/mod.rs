//! Snapshot wire format.
//!
//! A snapshot is a version byte, a length-prefixed configuration section and
//! then key/value records until end of stream. There is no record count and
//! no trailer: a clean end of stream at a record boundary ends the snapshot.
mod reader;
mod writer;

pub use reader::*;
pub use writer::*;
