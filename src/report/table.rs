//! Plain-text table rendering.

use std::fmt::Write as FmtWrite;

use super::format_number;
use super::status::{BurndownSummary, DayStatus};
use crate::engine::DaySeries;

const HEADERS: [&str; 6] = ["Day", "Label", "Ideal", "Actual", "Scope", "Status"];

/// Signed scope delta for display; blank when zero.
#[must_use]
pub fn format_scope_delta(delta: f64) -> String {
    if delta == 0.0 {
        String::new()
    } else if delta > 0.0 {
        format!("+{}", format_number(delta))
    } else {
        format_number(delta)
    }
}

/// Render one row per day, followed by the completion and scope summary.
#[must_use]
pub fn render_table(series: &DaySeries) -> String {
    let rows: Vec<[String; 6]> = series
        .rows()
        .map(|row| {
            [
                row.day.to_string(),
                row.label.to_string(),
                format!("{:.2}", row.ideal),
                format!("{:.2}", row.actual),
                format_scope_delta(row.scope_delta),
                DayStatus::classify(row.actual, row.ideal).to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    write_row(&mut out, &HEADERS.map(String::from), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(out, "{}", rule.join("-+-"));
    for row in &rows {
        write_row(&mut out, row, &widths);
    }

    let summary = BurndownSummary::from_series(series);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", summary.scope_text());
    let _ = writeln!(out, "{}", summary.completion_text());
    out
}

fn write_row(out: &mut String, cells: &[String; 6], widths: &[usize; 6]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, &w))| {
            // Numeric columns right-aligned.
            if (2..=4).contains(&i) || i == 0 {
                format!("{cell:>w$}")
            } else {
                format!("{cell:<w$}")
            }
        })
        .collect();
    let _ = writeln!(out, "{}", line.join(" | ").trim_end());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DaySeries {
        DaySeries {
            labels: vec!["Day 1".into(), "Day 2".into(), "Day 3".into()],
            ideal: vec![100.0, 55.0, 0.0],
            actual: vec![100.0, 60.0, 0.0],
            scope_delta_by_day: vec![0.0, 10.0, 0.0],
        }
    }

    #[test]
    fn test_scope_delta_format() {
        assert_eq!(format_scope_delta(0.0), "");
        assert_eq!(format_scope_delta(10.0), "+10");
        assert_eq!(format_scope_delta(-2.5), "-2.5");
    }

    #[test]
    fn test_table_has_row_per_day_and_summary() {
        let table = render_table(&sample());
        let lines: Vec<&str> = table.lines().collect();
        // header, rule, 3 rows, blank, scope, completion
        assert_eq!(lines.len(), 8);
        assert!(lines[0].starts_with("Day"));
        assert!(lines[3].contains("+10"));
        assert!(lines[3].contains("At risk"));
        assert!(lines[2].contains("On track"));
        assert_eq!(lines[6], "Total scope change: +10");
        assert_eq!(lines[7], "Projected completion: reached zero on Day 3.");
    }

    #[test]
    fn test_table_formats_two_decimals() {
        let table = render_table(&sample());
        assert!(table.contains("100.00"));
        assert!(table.contains("55.00"));
    }
}
