//! Small helpers shared across CLI tests.

use std::fs;
use std::io;
use std::path::PathBuf;

use tempfile::TempDir;

use super::{Cli, CliError, Command, RunCommand, RunMode, run_cli};

/// The 20-point worked sample.
pub(super) const SAMPLE: &str = "\
162,817,812
57,618,57
906,360,560
592,479,940
352,342,300
466,668,158
542,29,236
431,825,988
739,650,466
52,470,668
216,146,977
819,987,18
117,168,530
805,96,715
346,949,466
970,615,88
941,993,340
862,61,35
984,92,344
425,690,689
";

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn write_points(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    fs::write(&path, contents)?;
    Ok(path)
}

pub(super) fn run_cli_for(path: PathBuf, mode: RunMode) -> Cli {
    Cli {
        command: Command::Run(RunCommand {
            path,
            name: None,
            mode,
        }),
    }
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(summary) => panic!("{panic_msg}: got {summary:?}"),
        Err(err) => err,
    }
}
