//! Day labels for the burndown axis.

use chrono::{Datelike, Days, NaiveDate};

/// Parse a `YYYY-MM-DD` start date.
///
/// Anything that does not parse is treated as "no start date".
#[must_use]
pub fn parse_start_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(err) => {
            tracing::debug!(input = text, %err, "ignoring unparseable start date");
            None
        }
    }
}

/// Produce one label per day.
///
/// Without a start date labels read `Day 1` .. `Day N`. With one, label `i`
/// reads `D{i+1} (MM/DD)` for the calendar date `start + i` days.
#[must_use]
pub fn day_labels(start: Option<NaiveDate>, days: usize) -> Vec<String> {
    (0..days)
        .map(|i| {
            start
                .and_then(|s| s.checked_add_days(Days::new(i as u64)))
                .map_or_else(
                    || format!("Day {}", i + 1),
                    |date| format!("D{} ({:02}/{:02})", i + 1, date.month(), date.day()),
                )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_labels() {
        assert_eq!(day_labels(None, 3), vec!["Day 1", "Day 2", "Day 3"]);
    }

    #[test]
    fn test_dated_labels_cross_month() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 30);
        assert!(start.is_some());
        let labels = day_labels(start, 4);
        assert_eq!(
            labels,
            vec!["D1 (01/30)", "D2 (01/31)", "D3 (02/01)", "D4 (02/02)"]
        );
    }

    #[test]
    fn test_dated_labels_leap_day() {
        let labels = day_labels(parse_start_date("2024-02-28"), 3);
        assert_eq!(labels, vec!["D1 (02/28)", "D2 (02/29)", "D3 (03/01)"]);
    }

    #[test]
    fn test_parse_start_date() {
        assert_eq!(
            parse_start_date(" 2026-10-19 "),
            NaiveDate::from_ymd_opt(2026, 10, 19)
        );
        assert_eq!(parse_start_date(""), None);
        assert_eq!(parse_start_date("2026-13-01"), None);
        assert_eq!(parse_start_date("next monday"), None);
    }

    #[test]
    fn test_unparseable_date_falls_back_to_day_labels() {
        let labels = day_labels(parse_start_date("not-a-date"), 2);
        assert_eq!(labels, vec!["Day 1", "Day 2"]);
    }

    #[test]
    fn test_zero_days() {
        assert!(day_labels(None, 0).is_empty());
    }
}
