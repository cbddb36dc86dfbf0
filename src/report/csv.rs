//! CSV export.
//!
//! Every field is double-quoted with embedded quotes doubled. Rows are
//! joined with `\n` and there is no trailing newline.

use std::fmt::Write as FmtWrite;

use super::format_number;
use crate::engine::DaySeries;

/// Header row field names.
pub const CSV_HEADER: [&str; 5] = [
    "day",
    "label",
    "ideal_remaining",
    "actual_remaining",
    "scope_delta",
];

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

fn push_row<I, S>(out: &mut String, fields: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if !out.is_empty() {
        out.push('\n');
    }
    for (i, field) in fields.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&quote(field.as_ref()));
    }
}

/// Serialize a series as CSV: a header plus one row per day.
#[must_use]
pub fn to_csv(series: &DaySeries) -> String {
    let mut out = String::new();
    push_row(&mut out, CSV_HEADER);

    for row in series.rows() {
        let mut ideal = String::new();
        let mut actual = String::new();
        let _ = write!(ideal, "{:.2}", row.ideal);
        let _ = write!(actual, "{:.2}", row.actual);
        push_row(
            &mut out,
            [
                row.day.to_string(),
                row.label.to_string(),
                ideal,
                actual,
                format_number(row.scope_delta),
            ],
        );
    }

    out
}
