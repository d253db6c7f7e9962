mod entry_codec;
mod kv_state_machine;
mod kv_store;
mod state_machine;

#[cfg(test)]
mod entry_codec_test;

pub use entry_codec::*;
pub use kv_state_machine::*;
pub use kv_store::*;
pub use state_machine::*;
