//! Benchmark support crate for linkage.
//!
//! Provides seeded synthetic point clouds and parameter types shared by the
//! Criterion benchmarks for edge construction and clustering runs.

pub mod error;
pub mod params;
pub mod source;
