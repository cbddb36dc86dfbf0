//! CLI argument parsing.
//!
//! Numeric flags are kept as raw text here; the command handler turns bad
//! values into the same user-facing rejections a config file would get.

use std::path::PathBuf;

/// CLI arguments container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// The command to execute.
    pub command: Command,
}

/// Inputs and output options for one burndown run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// YAML configuration file; flags override its values.
    pub config_path: Option<PathBuf>,
    /// Start date (`YYYY-MM-DD`).
    pub start_date: Option<String>,
    /// Duration in days, as typed.
    pub duration_days: Option<String>,
    /// Total work, as typed.
    pub total_work: Option<String>,
    /// Burn model name.
    pub model: Option<String>,
    /// Variability percentage, as typed.
    pub variability: Option<String>,
    /// Scope-change list.
    pub scope_changes: Option<String>,
    /// Seed override.
    pub seed: Option<u64>,
    /// Output format name.
    pub format: Option<String>,
    /// Output file.
    pub output: Option<PathBuf>,
    /// Print run details to stderr.
    pub verbose: bool,
}

/// Available CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Simulate and render a burndown
    Run(RunOptions),
    /// Simulate and export CSV
    Csv(RunOptions),
    /// Show help
    Help,
    /// Show version
    Version,
}

impl Args {
    /// Parse command-line arguments from an iterator.
    ///
    /// This method is testable as it accepts any iterator of strings,
    /// not just `std::env::args()`.
    #[must_use]
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self::parse_from_vec(&args)
    }

    /// Parse command-line arguments from the environment.
    #[must_use]
    pub fn parse() -> Self {
        Self::parse_from(std::env::args())
    }

    /// Internal parsing from a vector of strings.
    fn parse_from_vec(args: &[String]) -> Self {
        if args.len() < 2 {
            return Self {
                command: Command::Help,
            };
        }

        let command = match args[1].as_str() {
            "run" => Self::parse_run_options(&args[2..]).map_or(Command::Help, Command::Run),
            "csv" => Self::parse_run_options(&args[2..]).map_or(Command::Help, Command::Csv),
            "-h" | "--help" | "help" => Command::Help,
            "-V" | "--version" | "version" => Command::Version,
            unknown => {
                eprintln!("Unknown command: {unknown}");
                Command::Help
            }
        };

        Self { command }
    }

    /// Parse the options shared by `run` and `csv`.
    ///
    /// Returns `None` (show help) when a flag is missing its value or unknown.
    fn parse_run_options(args: &[String]) -> Option<RunOptions> {
        let mut options = RunOptions::default();

        let mut i = 0;
        while i < args.len() {
            let flag = args[i].as_str();
            if matches!(flag, "-v" | "--verbose") {
                options.verbose = true;
                i += 1;
                continue;
            }

            let Some(value) = args.get(i + 1).cloned() else {
                eprintln!("Error: '{flag}' requires a value");
                return None;
            };

            match flag {
                "-c" | "--config" => options.config_path = Some(PathBuf::from(value)),
                "--start" => options.start_date = Some(value),
                "-d" | "--days" => options.duration_days = Some(value),
                "-t" | "--total" => options.total_work = Some(value),
                "-m" | "--model" => options.model = Some(value),
                "--variability" => options.variability = Some(value),
                "-s" | "--scope" => options.scope_changes = Some(value),
                "--seed" => {
                    if let Ok(seed) = value.parse() {
                        options.seed = Some(seed);
                    } else {
                        eprintln!("Warning: ignoring invalid seed '{value}'");
                    }
                }
                "-f" | "--format" => options.format = Some(value),
                "-o" | "--output" => options.output = Some(PathBuf::from(value)),
                unknown => {
                    eprintln!("Unknown option: {unknown}");
                    return None;
                }
            }
            i += 2;
        }

        Some(options)
    }
}
