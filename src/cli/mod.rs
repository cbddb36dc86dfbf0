//! CLI module for burndown.
//!
//! All CLI logic lives here rather than in main.rs so it can be tested.
//! The entry point `run_cli` is called from main.rs with parsed arguments.

mod args;
mod commands;
mod output;

pub use args::{Args, Command, RunOptions};
pub use commands::{build_config, execute, run_burndown, run_cli, RunOutcome};
pub use output::{print_error, print_help, print_run_details, print_version};
