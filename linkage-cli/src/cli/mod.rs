//! Command-line interface for running linkage clustering over point files.
//!
//! `run <PATH> steps` applies a fixed number of connections and multiplies
//! the largest circuit sizes. `run <PATH> bridge` connects until one edge
//! would join the last two circuits and multiplies one coordinate of its
//! endpoints.

mod commands;

pub use commands::{
    Answer, AxisArg, BridgeArgs, Cli, CliError, Command, ExecutionSummary, RunCommand, RunMode,
    StepsArgs, auto_step_limit, render_summary, run_cli,
};

#[cfg(test)]
mod test_helpers;
