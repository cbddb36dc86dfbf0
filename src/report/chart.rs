//! Text line chart of the ideal and actual series.
//!
//! One column per day. The y axis starts at zero, or lower when the adjusted
//! ideal line goes negative.

use std::fmt::Write as FmtWrite;

use crate::engine::DaySeries;

/// Default plot height in rows.
pub const DEFAULT_CHART_HEIGHT: usize = 12;

const IDEAL_MARK: char = '.';
const ACTUAL_MARK: char = '*';
const BOTH_MARK: char = '#';

/// Render the chart with `height` plot rows (at least 2).
#[must_use]
pub fn render_chart(series: &DaySeries, height: usize) -> String {
    let height = height.max(2);
    let mut out = String::new();
    if series.is_empty() {
        return out;
    }

    let values = series.ideal.iter().chain(&series.actual);
    let max = values.clone().copied().fold(0.0_f64, f64::max);
    let min = values.copied().fold(0.0_f64, f64::min);
    let span = if max > min { max - min } else { 1.0 };

    let to_row = |v: f64| -> usize {
        let scaled = ((max - v) / span * (height - 1) as f64).round();
        (scaled.max(0.0) as usize).min(height - 1)
    };

    let mut grid = vec![vec![' '; series.len()]; height];
    for (col, (&ideal, &actual)) in series.ideal.iter().zip(&series.actual).enumerate() {
        let ideal_row = to_row(ideal);
        let actual_row = to_row(actual);
        grid[ideal_row][col] = IDEAL_MARK;
        grid[actual_row][col] = if ideal_row == actual_row {
            BOTH_MARK
        } else {
            ACTUAL_MARK
        };
    }

    let axis_width = format!("{max:.0}").len().max(format!("{min:.0}").len());
    for (r, line) in grid.iter().enumerate() {
        let tick = if r == 0 {
            format!("{max:.0}")
        } else if r == height - 1 {
            format!("{min:.0}")
        } else {
            String::new()
        };
        let body: String = line.iter().collect();
        let _ = writeln!(out, "{tick:>axis_width$} |{}", body.trim_end());
    }
    let _ = writeln!(out, "{:>axis_width$} +{}", "", "-".repeat(series.len()));

    let first = series.labels.first().map_or("", String::as_str);
    let last = series.labels.last().map_or("", String::as_str);
    let _ = writeln!(out, "{:>axis_width$}  {first} .. {last}", "");
    let _ = writeln!(
        out,
        "{:>axis_width$}  {IDEAL_MARK} ideal (adjusted)  {ACTUAL_MARK} actual  {BOTH_MARK} both",
        ""
    );
    out
}
