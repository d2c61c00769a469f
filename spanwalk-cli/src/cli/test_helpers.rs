//! Helpers shared by the CLI unit tests.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use tempfile::TempDir;

use super::commands::run_command;
use super::{Cli, CliError, Command, RunCommand, run_cli};

/// The course graph: six vertices, vertex 4 isolated, minimum forest weight 15.
pub(super) const SIX_VERTEX_GRAPH: &str = "\
# six vertices, one isolated
vertex 4
edge 0 2 0 7
edge 1 3 1 1
edge 2 1 5 19
edge 3 3 2 3   # closes no cycle
edge 4 2 5 16
edge 5 3 0 2
edge 6 0 5 9
";

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn create_graph_file(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    let mut file = File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

pub(super) fn run_args(path: PathBuf, trace: bool, max_steps: usize) -> RunCommand {
    RunCommand {
        path,
        trace,
        max_steps,
    }
}

pub(super) fn run_cli_expecting_error(command: RunCommand, panic_msg: &str) -> CliError {
    let cli = Cli {
        command: Command::Run(command),
    };
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}

pub(super) fn run_command_expecting_error(command: RunCommand, panic_msg: &str) -> CliError {
    match run_command(command) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
