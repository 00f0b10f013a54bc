//! Shared test utilities used across linkage crates.

pub mod proptest_profile;
pub mod tracing;
