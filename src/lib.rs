//! Replicated key-value state machine.
//!
//! [`KvStateMachine`] applies committed `set` commands to a concurrent
//! in-memory map and persists/restores the whole map through a compact
//! length-prefixed snapshot format. It plugs into a consensus engine through
//! the [`StateMachine`] and [`StateMachineSnapshot`] traits.

mod config;
mod errors;
mod membership;
mod snapshot;
mod storage;

pub mod constants;

pub use config::*;
pub use errors::*;
pub use membership::*;
pub use snapshot::*;
pub use storage::*;

//-----------------------------------------------------------
// Test utils

#[cfg(test)]
pub mod test_utils;
