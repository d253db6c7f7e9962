//! the test_utils folder here will share utils between the unit tests of
//! every module
mod common;
mod entry_builder;

pub use common::*;
pub use entry_builder::*;
