//! burndown CLI - Project burndown projection
//!
//! Command-line interface for simulating and exporting burndowns.

use std::process::ExitCode;

use burndown::cli::{run_cli, Args};
use burndown::logging::init_tracing;

fn main() -> ExitCode {
    init_tracing();
    run_cli(Args::parse())
}
