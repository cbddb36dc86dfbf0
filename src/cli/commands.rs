//! CLI command handlers.
//!
//! Each run builds a fresh configuration, simulates once and hands the
//! returned [`SimulationRun`] to the renderer. Nothing is kept between runs.

use std::process::ExitCode;

use crate::config::BurndownConfig;
use crate::engine::{simulate, SimulationRun};
use crate::error::{BurndownError, BurndownResult};
use crate::report::{render, with_title, write_output, OutputFormat};

use super::args::RunOptions;
use super::output::{print_error, print_help, print_run_details, print_version};
use super::{Args, Command};

/// Main CLI entry point.
///
/// Dispatches to the appropriate command handler based on parsed arguments.
#[must_use]
pub fn run_cli(args: Args) -> ExitCode {
    match args.command {
        Command::Run(options) => run_burndown(&options, None),
        Command::Csv(options) => run_burndown(&options, Some(OutputFormat::Csv)),
        Command::Help => {
            print_help();
            ExitCode::SUCCESS
        }
        Command::Version => {
            print_version();
            ExitCode::SUCCESS
        }
    }
}

/// Run one burndown and print or write the result.
///
/// `forced_format` overrides both the config file and `--format`.
#[must_use]
pub fn run_burndown(options: &RunOptions, forced_format: Option<OutputFormat>) -> ExitCode {
    match execute(options, forced_format) {
        Ok(outcome) => {
            if options.verbose {
                print_run_details(&outcome.run);
            }
            match outcome.destination {
                Some(path) => {
                    if let Err(e) = write_output(&outcome.rendered, &path) {
                        print_error(&e);
                        return ExitCode::from(1);
                    }
                    eprintln!("Wrote {} to {}", outcome.format, path.display());
                }
                None => print!("{}", with_trailing_newline(&outcome.rendered)),
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            print_error(&e);
            ExitCode::from(1)
        }
    }
}

fn with_trailing_newline(text: &str) -> String {
    if text.ends_with('\n') {
        text.to_string()
    } else {
        format!("{text}\n")
    }
}

/// A completed run, rendered and ready to emit.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// The simulation result.
    pub run: SimulationRun,
    /// Format used for rendering.
    pub format: OutputFormat,
    /// Rendered report.
    pub rendered: String,
    /// Output file, or `None` for stdout.
    pub destination: Option<std::path::PathBuf>,
}

/// Build, validate, simulate and render without touching stdout.
///
/// # Errors
///
/// Returns an input rejection for bad duration, total work, model or format,
/// or a configuration error if the config file cannot be loaded.
pub fn execute(
    options: &RunOptions,
    forced_format: Option<OutputFormat>,
) -> BurndownResult<RunOutcome> {
    let config = build_config(options, forced_format)?;
    config.check()?;

    let params = config.to_params();
    tracing::debug!(?params, "starting burndown run");
    let run = simulate(&params);

    let format = config.output.format;
    let rendered = with_title(
        render(&run, format, config.output.chart_height)?,
        &config.project.name,
        format,
    );

    Ok(RunOutcome {
        run,
        format,
        rendered,
        destination: config.output.path,
    })
}

/// Merge the optional config file with command-line overrides.
///
/// The merged result is not checked here; a file value replaced by a flag
/// never causes a rejection.
///
/// # Errors
///
/// Returns error when the file cannot be read or a flag value is invalid.
pub fn build_config(
    options: &RunOptions,
    forced_format: Option<OutputFormat>,
) -> BurndownResult<BurndownConfig> {
    let mut config = match &options.config_path {
        Some(path) => BurndownConfig::read(path)?,
        None => BurndownConfig::default(),
    };
    let section = &mut config.burndown;

    if let Some(start) = &options.start_date {
        section.start_date = Some(start.clone());
    }
    if let Some(days) = &options.duration_days {
        section.duration_days = parse_number(days).ok_or_else(|| {
            BurndownError::InvalidDuration {
                value: days.clone(),
            }
        })?;
    }
    if let Some(total) = &options.total_work {
        section.total_work = parse_number(total).ok_or_else(|| {
            BurndownError::InvalidTotalWork {
                value: total.clone(),
            }
        })?;
    }
    if let Some(model) = &options.model {
        section.model = model.parse()?;
    }
    if let Some(variability) = &options.variability {
        section.variability = parse_number(variability).ok_or_else(|| {
            BurndownError::config(format!("Variability must be a number, got '{variability}'"))
        })?;
    }
    if let Some(scope) = &options.scope_changes {
        section.scope_changes.clone_from(scope);
    }
    if options.seed.is_some() {
        config.reproducibility.seed = options.seed;
    }
    if let Some(format) = &options.format {
        config.output.format = format.parse()?;
    }
    if let Some(format) = forced_format {
        config.output.format = format;
    }
    if options.output.is_some() {
        config.output.path.clone_from(&options.output);
    }

    Ok(config)
}

fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok()
}
