//! Scope-change parsing.
//!
//! Scope changes are written as comma-separated `day:amount` tokens, for
//! example `3:+10, 6:-5`. Day numbers are 1-based. Parsing is lenient:
//! malformed tokens never fail the run, they are collected in
//! [`ScopeChangeParse::rejected`] so callers can report them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A discrete addition or removal of work scheduled for a specific day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScopeChange {
    /// 1-based day number. May be fractional; such days never match a day.
    pub day: f64,
    /// Signed amount of work added (positive) or removed (negative).
    pub amount: f64,
}

impl ScopeChange {
    /// Create a scope change.
    #[must_use]
    pub const fn new(day: f64, amount: f64) -> Self {
        Self { day, amount }
    }

    /// Map the 1-based day onto a 0-based index within `days`.
    ///
    /// Returns `None` for fractional days and days outside `[1, days]`.
    #[must_use]
    pub fn day_index(&self, days: usize) -> Option<usize> {
        if self.day.fract() != 0.0 || self.day < 1.0 || self.day > days as f64 {
            return None;
        }
        Some(self.day as usize - 1)
    }
}

/// Why a scope-change token was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// Token has no `:` separator.
    MissingSeparator,
    /// Day is not a finite number.
    InvalidDay,
    /// Amount is not a finite number.
    InvalidAmount,
    /// Day is below 1.
    DayBelowOne,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::MissingSeparator => "missing ':' separator",
            Self::InvalidDay => "day is not a number",
            Self::InvalidAmount => "amount is not a number",
            Self::DayBelowOne => "day must be at least 1",
        };
        f.write_str(text)
    }
}

/// A token that did not parse as a scope change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedToken {
    /// Token text after trimming.
    pub token: String,
    /// Reason for rejection.
    pub reason: RejectReason,
}

/// Outcome of parsing a scope-change list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScopeChangeParse {
    /// Accepted changes, in input order.
    pub accepted: Vec<ScopeChange>,
    /// Dropped tokens, in input order.
    pub rejected: Vec<RejectedToken>,
}

impl ScopeChangeParse {
    /// True when every non-empty token was accepted.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Parse a comma-separated list of `day:amount` tokens.
///
/// Empty or whitespace-only input yields an empty result.
#[must_use]
pub fn parse_scope_changes(text: &str) -> ScopeChangeParse {
    let mut parse = ScopeChangeParse::default();

    for token in text.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        match parse_token(token) {
            Ok(change) => parse.accepted.push(change),
            Err(reason) => {
                tracing::debug!(token, %reason, "dropping scope change token");
                parse.rejected.push(RejectedToken {
                    token: token.to_string(),
                    reason,
                });
            }
        }
    }

    parse
}

fn parse_token(token: &str) -> Result<ScopeChange, RejectReason> {
    let mut pieces = token.split(':');
    let day_text = pieces.next().unwrap_or_default();
    let amount_text = pieces.next().ok_or(RejectReason::MissingSeparator)?;

    let day = parse_number(day_text).ok_or(RejectReason::InvalidDay)?;
    let amount = parse_number(amount_text).ok_or(RejectReason::InvalidAmount)?;

    if day < 1.0 {
        return Err(RejectReason::DayBelowOne);
    }

    Ok(ScopeChange { day, amount })
}

/// Lenient numeric conversion: blank text is zero, non-finite values are rejected.
fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Some(0.0);
    }
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}
