//! CLI output formatting.
//!
//! Rendered reports go to stdout (or a file). Everything else written here
//! goes to stderr so that `burndown csv > out.csv` stays clean.

use crate::engine::SimulationRun;
use crate::error::BurndownError;

/// Print version information.
pub fn print_version() {
    let version = option_env!("BURNDOWN_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
    match option_env!("GIT_HASH") {
        Some(hash) if !hash.is_empty() => println!("burndown {version} ({hash})"),
        _ => println!("burndown {version}"),
    }
}

/// Print help message.
pub fn print_help() {
    println!(
        r#"burndown - Project burndown projection

USAGE:
    burndown <COMMAND> [OPTIONS]

COMMANDS:
    run                         Simulate and print a burndown
    csv                         Simulate and export CSV (same options as run)
    help                        Show this help message
    version                     Show version information

OPTIONS:
    -c, --config <FILE>         Read inputs from a YAML file; flags override it
        --start <YYYY-MM-DD>    Start date for day labels
    -d, --days <N>              Duration in days (min 2, clamped to 120)
    -t, --total <W>             Total work (must be greater than 0)
    -m, --model <MODEL>         linear | realistic | custom
        --variability <PCT>     Variability for realistic (clamped to 0-60)
    -s, --scope <LIST>          Scope changes, e.g. "3:+10, 6:-5"
        --seed <N>              Seed for reproducible realistic runs
    -f, --format <FORMAT>       table | csv | json | chart
    -o, --output <FILE>         Write to a file instead of stdout
    -v, --verbose               Print run details to stderr

EXAMPLES:
    burndown run --days 10 --total 100 --scope "3:+10, 6:+5"
    burndown run --model realistic --variability 30 --seed 42 --format chart
    burndown csv --start 2026-01-05 --output burndown.csv
    burndown run --config sprint.yaml

LOGGING:
    Set BURNDOWN_LOG (e.g. BURNDOWN_LOG=burndown=debug) for diagnostics.
"#
    );
}

/// Print run details: model, seed and any dropped scope changes.
pub fn print_run_details(run: &SimulationRun) {
    eprintln!("Model: {}", run.model);
    eprintln!("Seed:  {}", run.seed);
    eprintln!("Days:  {}", run.series.len());

    if !run.scope.accepted.is_empty() {
        eprintln!("Scope changes accepted: {}", run.scope.accepted.len());
    }
    for rejected in &run.scope.rejected {
        eprintln!("  ! dropped '{}': {}", rejected.token, rejected.reason);
    }
    for change in &run.ignored_scope_changes {
        eprintln!(
            "  ! ignored day {} ({}): outside the run",
            change.day, change.amount
        );
    }
}

/// Print an error; input rejections are shown as the plain notice.
pub fn print_error(err: &BurndownError) {
    if err.is_input_rejection() {
        eprintln!("{err}");
    } else {
        eprintln!("Error: {err}");
    }
}
