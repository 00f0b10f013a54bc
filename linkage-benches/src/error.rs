//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` so only the Criterion
//! entry points decide how to abort.

use linkage_core::{EdgeError, LinkageError};

use crate::source::SyntheticError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic point generation failed.
    #[error("synthetic cloud generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// Edge construction failed.
    #[error("edge construction failed: {0}")]
    Edge(#[from] EdgeError),
    /// Clustering configuration or execution failed.
    #[error("clustering failed: {0}")]
    Linkage(#[from] LinkageError),
}
