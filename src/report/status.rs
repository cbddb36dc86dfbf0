//! Per-day status and run summary.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::engine::DaySeries;

/// Tolerance above the ideal line before a day counts as off track.
pub const AT_RISK_FACTOR: f64 = 1.15;

/// How a day's actual remaining work compares with the ideal line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DayStatus {
    /// At or below the ideal line.
    OnTrack,
    /// Above the ideal line by at most 15%.
    AtRisk,
    /// More than 15% above the ideal line.
    OffTrack,
}

impl DayStatus {
    /// Classify one day.
    #[must_use]
    pub fn classify(actual: f64, ideal: f64) -> Self {
        if actual <= ideal {
            Self::OnTrack
        } else if actual <= ideal * AT_RISK_FACTOR {
            Self::AtRisk
        } else {
            Self::OffTrack
        }
    }
}

impl fmt::Display for DayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::OnTrack => "On track",
            Self::AtRisk => "At risk",
            Self::OffTrack => "Off track",
        })
    }
}

/// Status of every day in the series.
#[must_use]
pub fn classify_series(series: &DaySeries) -> Vec<DayStatus> {
    series
        .actual
        .iter()
        .zip(&series.ideal)
        .map(|(&actual, &ideal)| DayStatus::classify(actual, ideal))
        .collect()
}

/// Completion and scope figures for a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BurndownSummary {
    /// First 1-based day with zero remaining work, if the run ends at zero.
    pub completion_day: Option<usize>,
    /// Net scope change over the run.
    pub total_scope_change: f64,
}

impl BurndownSummary {
    /// Summarise a series.
    #[must_use]
    pub fn from_series(series: &DaySeries) -> Self {
        let completion_day = match series.actual.last() {
            Some(&last) if last == 0.0 => series
                .actual
                .iter()
                .position(|&v| v == 0.0)
                .map(|idx| idx + 1),
            _ => None,
        };
        Self {
            completion_day,
            total_scope_change: series.scope_delta_by_day.iter().sum(),
        }
    }

    /// One-line projected completion sentence.
    #[must_use]
    pub fn completion_text(&self) -> String {
        self.completion_day.map_or_else(
            || "Projected completion: not reached within the selected duration.".to_string(),
            |day| format!("Projected completion: reached zero on Day {day}."),
        )
    }

    /// Signed total scope change sentence.
    #[must_use]
    pub fn scope_text(&self) -> String {
        let sign = if self.total_scope_change >= 0.0 { "+" } else { "" };
        format!(
            "Total scope change: {sign}{}",
            super::format_number(self.total_scope_change)
        )
    }
}
