//! Property-based tests for the clustering driver.
//!
//! Generates point clouds with varied spatial layouts and checks that the
//! forest stays a partition at every step, that stopping rules fire exactly
//! when they should, and that the reported bridge is the cheapest edge
//! joining the last two components.

mod invariants;
mod strategies;
mod types;
