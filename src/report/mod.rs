//! Consumers of a simulation run.
//!
//! Provides:
//! - Per-day status classification and completion summary
//! - Plain-text table and line chart
//! - CSV and JSON export
//!
//! # Example
//!
//! ```rust
//! use burndown::engine::{simulate, BurnModel, SimulationParams};
//! use burndown::report::{render, OutputFormat};
//!
//! let params = SimulationParams {
//!     model: BurnModel::Linear,
//!     seed: Some(42),
//!     ..SimulationParams::default()
//! };
//! let run = simulate(&params);
//! let csv = render(&run, OutputFormat::Csv, 12).unwrap_or_default();
//! assert_eq!(csv.lines().count(), run.series.len() + 1);
//! ```

pub mod chart;
pub mod csv;
pub mod status;
pub mod table;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write as IoWrite};
use std::path::Path;
use std::str::FromStr;

pub use chart::{render_chart, DEFAULT_CHART_HEIGHT};
pub use csv::{to_csv, CSV_HEADER};
pub use status::{classify_series, BurndownSummary, DayStatus};
pub use table::{format_scope_delta, render_table};

use crate::engine::SimulationRun;
use crate::error::{BurndownError, BurndownResult};

/// Shortest decimal form of a number, without a trailing `.0` or a negative zero.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Day-by-day table with summary.
    #[default]
    Table,
    /// Quoted CSV.
    Csv,
    /// Pretty JSON of the whole run.
    Json,
    /// Text line chart followed by the summary.
    Chart,
}

impl FromStr for OutputFormat {
    type Err = BurndownError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "chart" => Ok(Self::Chart),
            other => Err(BurndownError::UnknownFormat {
                name: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Table => "table",
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Chart => "chart",
        })
    }
}

/// Serialize a run as pretty JSON.
///
/// # Errors
///
/// Returns error if serialization fails.
pub fn to_json(run: &SimulationRun) -> BurndownResult<String> {
    serde_json::to_string_pretty(run)
        .map_err(|e| BurndownError::serialization(format!("JSON serialization failed: {e}")))
}

/// Render a run in the requested format.
///
/// `chart_height` only affects [`OutputFormat::Chart`].
///
/// # Errors
///
/// Returns error if JSON serialization fails.
pub fn render(
    run: &SimulationRun,
    format: OutputFormat,
    chart_height: usize,
) -> BurndownResult<String> {
    match format {
        OutputFormat::Table => Ok(render_table(&run.series)),
        OutputFormat::Csv => Ok(to_csv(&run.series)),
        OutputFormat::Json => to_json(run),
        OutputFormat::Chart => {
            let summary = BurndownSummary::from_series(&run.series);
            Ok(format!(
                "{}\n{}\n{}\n",
                render_chart(&run.series, chart_height),
                summary.scope_text(),
                summary.completion_text()
            ))
        }
    }
}

/// Put a title line above human-readable output.
///
/// CSV and JSON are returned unchanged, as is everything when `title` is blank.
#[must_use]
pub fn with_title(rendered: String, title: &str, format: OutputFormat) -> String {
    let title = title.trim();
    match format {
        OutputFormat::Table | OutputFormat::Chart if !title.is_empty() => {
            format!("{title}\n{}\n\n{rendered}", "=".repeat(title.chars().count()))
        }
        _ => rendered,
    }
}

/// Write rendered output to a file.
///
/// # Errors
///
/// Returns error if file operations fail.
pub fn write_output(content: &str, path: &Path) -> BurndownResult<()> {
    let file = File::create(path)
        .map_err(|e| BurndownError::io(format!("Failed to create {}: {e}", path.display())))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(content.as_bytes())
        .map_err(|e| BurndownError::io(format!("Write failed: {e}")))?;
    writer
        .flush()
        .map_err(|e| BurndownError::io(format!("Flush failed: {e}")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{simulate, BurnModel, SimulationParams};

    fn linear_run() -> SimulationRun {
        simulate(&SimulationParams {
            model: BurnModel::Linear,
            scope_changes_text: "3:+10, 6:+5".to_string(),
            seed: Some(42),
            ..SimulationParams::default()
        })
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(10.0), "10");
        assert_eq!(format_number(-5.0), "-5");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("CSV".parse::<OutputFormat>().ok(), Some(OutputFormat::Csv));
        assert_eq!(" chart ".parse::<OutputFormat>().ok(), Some(OutputFormat::Chart));
        assert!(matches!(
            "xlsx".parse::<OutputFormat>(),
            Err(BurndownError::UnknownFormat { .. })
        ));
        assert_eq!(OutputFormat::default(), OutputFormat::Table);
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_render_every_format() {
        let run = linear_run();
        for format in [
            OutputFormat::Table,
            OutputFormat::Csv,
            OutputFormat::Json,
            OutputFormat::Chart,
        ] {
            let rendered = render(&run, format, DEFAULT_CHART_HEIGHT);
            assert!(rendered.is_ok(), "{format} failed");
            assert!(!rendered.unwrap_or_default().is_empty());
        }
    }

    #[test]
    fn test_json_contains_series_and_seed() {
        let run = linear_run();
        let json = to_json(&run).unwrap_or_default();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap_or_default();
        assert_eq!(value["seed"], 42);
        assert_eq!(value["model"], "linear");
        assert_eq!(value["series"]["actual"].as_array().map(Vec::len), Some(10));
    }

    #[test]
    fn test_chart_render_includes_summary() {
        let rendered = render(&linear_run(), OutputFormat::Chart, 6).unwrap_or_default();
        assert!(rendered.contains("Total scope change: +15"));
        assert!(rendered.contains("Projected completion"));
    }

    #[test]
    fn test_with_title_on_text_formats() {
        let run = linear_run();
        let table = render(&run, OutputFormat::Table, DEFAULT_CHART_HEIGHT).unwrap_or_default();
        let titled = with_title(table.clone(), " Sprint 14 ", OutputFormat::Table);
        assert!(titled.starts_with("Sprint 14\n=========\n\n"));
        assert!(titled.ends_with(&table));

        let chart = render(&run, OutputFormat::Chart, 6).unwrap_or_default();
        assert!(with_title(chart, "Sprint 14", OutputFormat::Chart).starts_with("Sprint 14\n"));
    }

    #[test]
    fn test_with_title_leaves_data_formats_alone() {
        let run = linear_run();
        for format in [OutputFormat::Csv, OutputFormat::Json] {
            let rendered = render(&run, format, DEFAULT_CHART_HEIGHT).unwrap_or_default();
            assert_eq!(with_title(rendered.clone(), "Sprint 14", format), rendered);
        }
        assert_eq!(with_title("body".into(), "  ", OutputFormat::Table), "body");
    }

    #[test]
    fn test_write_output() {
        let dir = tempfile::tempdir();
        assert!(dir.is_ok());
        if let Ok(dir) = dir {
            let path = dir.path().join("burndown.csv");
            let csv = to_csv(&linear_run().series);
            assert!(write_output(&csv, &path).is_ok());
            let read = std::fs::read_to_string(&path).unwrap_or_default();
            assert_eq!(read, csv);
        }
    }

    #[test]
    fn test_write_output_bad_path() {
        let result = write_output("x", Path::new("/nonexistent-dir/burndown.csv"));
        assert!(matches!(result, Err(BurndownError::Io(_))));
    }
}
