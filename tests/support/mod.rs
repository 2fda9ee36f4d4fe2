// tests/support/mod.rs
// Each integration test binary pulls in this module but only uses part of it.
#![allow(dead_code, unused_imports)]

pub mod builders;
pub mod helpers;
pub mod mocks;

pub use builders::*;
pub use helpers::*;
pub use mocks::*;
