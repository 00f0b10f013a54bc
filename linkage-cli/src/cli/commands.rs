//! Command implementations and argument parsing for the linkage CLI.

use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use linkage_core::{
    Axis, Euclidean, LinkageError, StopCondition, bridge_coordinate_product, cluster,
    largest_component_product, top_count,
};
use linkage_providers_points::{PointCloud, PointCloudError};
use thiserror::Error;
use tracing::{Span, field, info, instrument, warn};

/// Point count of the worked sample, which uses a shorter step limit.
const SAMPLE_POINT_COUNT: usize = 20;
/// Step limit applied to the worked sample.
const SAMPLE_STEP_LIMIT: usize = 10;
/// Step limit applied to every other input.
const DEFAULT_STEP_LIMIT: usize = 1_000;
/// Number of largest circuits multiplied by default.
const DEFAULT_TOP: usize = 3;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "linkage", about = "Cluster 3-D points by repeatedly joining the closest pair.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Cluster the points in a file.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Path to a file with one `x,y,z` point per line.
    pub path: PathBuf,

    /// Override name for the point cloud (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,

    /// What to compute once the points are loaded.
    #[command(subcommand)]
    pub mode: RunMode,
}

/// Answers the `run` command can compute.
#[derive(Debug, Subcommand, Clone)]
pub enum RunMode {
    /// Apply a fixed number of connections and multiply the largest circuit sizes.
    Steps(StepsArgs),
    /// Find the connection that joins the last two circuits.
    Bridge(BridgeArgs),
}

/// Arguments for the fixed-step mode.
#[derive(Debug, Args, Clone)]
pub struct StepsArgs {
    /// Connections to apply (defaults to 10 for a 20-point file, else 1000).
    #[arg(long, value_parser = clap::value_parser!(usize))]
    pub limit: Option<usize>,

    /// Number of largest circuits to multiply.
    #[arg(long, default_value_t = DEFAULT_TOP, value_parser = clap::value_parser!(usize))]
    pub top: usize,
}

/// Arguments for the bridge mode.
#[derive(Debug, Args, Clone)]
pub struct BridgeArgs {
    /// Coordinate multiplied across the bridge endpoints.
    #[arg(long, value_enum, default_value_t = AxisArg::X)]
    pub axis: AxisArg,
}

/// Axis selector accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AxisArg {
    /// The first coordinate.
    X,
    /// The second coordinate.
    Y,
    /// The third coordinate.
    Z,
}

impl From<AxisArg> for Axis {
    fn from(value: AxisArg) -> Self {
        match value {
            AxisArg::X => Self::X,
            AxisArg::Y => Self::Y,
            AxisArg::Z => Self::Z,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The input file did not contain a valid point cloud.
    #[error(transparent)]
    Points(#[from] PointCloudError),
    /// Clustering failed.
    #[error(transparent)]
    Core(#[from] LinkageError),
    /// The edges ran out before a bridge between two circuits appeared.
    #[error("no bridge joins the last two circuits of `{data_source}`")]
    NoBridge {
        /// Name of the point cloud.
        data_source: String,
    },
}

/// The number printed by a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    /// Product of the largest circuit sizes.
    ComponentProduct(u64),
    /// Product of one coordinate across the bridge endpoints.
    BridgeProduct(i128),
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ComponentProduct(value) => write!(f, "{value}"),
            Self::BridgeProduct(value) => write!(f, "{value}"),
        }
    }
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionSummary {
    /// Name of the point cloud.
    pub data_source: String,
    /// Number of points loaded.
    pub points: usize,
    /// Connections applied before the run stopped.
    pub steps: usize,
    /// Circuits remaining when the run stopped.
    pub components: usize,
    /// The computed answer.
    pub answer: Answer,
}

/// Returns the step limit used when `--limit` is omitted.
///
/// # Examples
/// ```
/// use linkage_cli::cli::auto_step_limit;
///
/// assert_eq!(auto_step_limit(20), 10);
/// assert_eq!(auto_step_limit(1_000), 1_000);
/// ```
#[must_use]
pub const fn auto_step_limit(points: usize) -> usize {
    if points == SAMPLE_POINT_COUNT {
        SAMPLE_STEP_LIMIT
    } else {
        DEFAULT_STEP_LIMIT
    }
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading or clustering fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use linkage_cli::cli::{Answer, Cli, Command, RunCommand, RunMode, StepsArgs, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "0,0,0\n0,0,1\n10,0,0\n10,0,1\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         path: file.path().to_path_buf(),
///         name: None,
///         mode: RunMode::Steps(StepsArgs { limit: Some(1), top: 3 }),
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.answer, Answer::ComponentProduct(2));
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(mode = field::Empty, override_name = field::Empty),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let RunCommand { path, name, mode } = command;
    let span = Span::current();
    span.record(
        "override_name",
        field::display(name.as_deref().unwrap_or("<derived>")),
    );
    let cloud = load_points(&path, name.as_deref())?;

    let summary = match mode {
        RunMode::Steps(args) => {
            span.record("mode", field::display("steps"));
            run_steps(&cloud, &args)?
        }
        RunMode::Bridge(args) => {
            span.record("mode", field::display("bridge"));
            run_bridge(&cloud, args)?
        }
    };

    info!(
        data_source = summary.data_source.as_str(),
        steps = summary.steps,
        components = summary.components,
        "command completed"
    );
    Ok(summary)
}

#[instrument(
    name = "cli.run_steps",
    err,
    skip(cloud, args),
    fields(limit = field::Empty, top = args.top),
)]
pub(super) fn run_steps(
    cloud: &PointCloud,
    args: &StepsArgs,
) -> Result<ExecutionSummary, CliError> {
    let limit = args.limit.unwrap_or_else(|| auto_step_limit(cloud.len()));
    Span::current().record("limit", limit);
    let condition = StopCondition::after_steps(limit)?;
    let top = top_count(args.top)?;

    let outcome = cluster(cloud.points(), &Euclidean, condition)?;
    let product = largest_component_product(outcome.forest(), top);
    Ok(ExecutionSummary {
        data_source: cloud.name().to_owned(),
        points: cloud.len(),
        steps: outcome.steps(),
        components: outcome.forest().component_count(),
        answer: Answer::ComponentProduct(product),
    })
}

#[instrument(name = "cli.run_bridge", err, skip(cloud), fields(axis = ?args.axis))]
pub(super) fn run_bridge(
    cloud: &PointCloud,
    args: BridgeArgs,
) -> Result<ExecutionSummary, CliError> {
    let outcome = cluster(cloud.points(), &Euclidean, StopCondition::BridgeFound)?;
    let Some(bridge) = outcome.lookahead() else {
        warn!(
            data_source = cloud.name(),
            points = cloud.len(),
            "edges exhausted without a bridge"
        );
        return Err(CliError::NoBridge {
            data_source: cloud.name().to_owned(),
        });
    };
    let (left, right) = bridge.endpoints();
    info!(%left, %right, weight = bridge.weight(), "bridge found");
    Ok(ExecutionSummary {
        data_source: cloud.name().to_owned(),
        points: cloud.len(),
        steps: outcome.steps(),
        components: outcome.forest().component_count(),
        answer: Answer::BridgeProduct(bridge_coordinate_product(bridge, args.axis.into())),
    })
}

#[instrument(name = "cli.load_points", err, skip(path), fields(path = %path.display()))]
pub(super) fn load_points(
    path: &Path,
    override_name: Option<&str>,
) -> Result<PointCloud, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let name = derive_data_source_name(path, override_name);
    let cloud = PointCloud::try_from_reader(name, BufReader::new(file))?;
    info!(data_source = cloud.name(), points = cloud.len(), "points loaded");
    Ok(cloud)
}

pub(super) fn derive_data_source_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| "points".to_owned())
}

/// Writes the answer of `summary` to `writer` on a single line.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use linkage_cli::cli::{Answer, ExecutionSummary, render_summary};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary {
///     data_source: "demo".into(),
///     points: 20,
///     steps: 10,
///     components: 11,
///     answer: Answer::ComponentProduct(40),
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(buffer, b"40\n");
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "{}", summary.answer)
}
