//! Burndown simulation.
//!
//! Produces, per day, an adjusted ideal line and a simulated actual line of
//! remaining work. Scope changes land at the start of their day and move
//! both lines; the actual line never drops below zero.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::labels::day_labels;
use super::model::{BurnContext, BurnModel, BurnModelKind};
use super::rng::SimRng;
use super::scope::{parse_scope_changes, ScopeChange, ScopeChangeParse};
use crate::error::{BurndownError, BurndownResult};

/// Shortest allowed run, in days.
pub const MIN_DAYS: u32 = 2;
/// Longest allowed run, in days.
pub const MAX_DAYS: u32 = 120;

/// Inputs for one burndown run.
///
/// Constructed fresh per run. `seed: None` draws a seed from entropy; the
/// seed actually used is reported on [`SimulationRun`].
#[derive(Debug, Clone)]
pub struct SimulationParams {
    /// Optional first calendar day, used only for labels.
    pub start_date: Option<NaiveDate>,
    /// Number of days; clamped to `[2, 120]` when simulating.
    pub duration_days: u32,
    /// Total work at the start; floored at 1 when simulating.
    pub total_work: f64,
    /// Burn model.
    pub model: BurnModel,
    /// Variability percentage for the `realistic` model.
    pub variability: f64,
    /// Raw `day:amount, ...` scope-change list.
    pub scope_changes_text: String,
    /// Seed for the `realistic` model's draws.
    pub seed: Option<u64>,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            start_date: None,
            duration_days: 10,
            total_work: 100.0,
            model: BurnModel::Realistic,
            variability: 20.0,
            scope_changes_text: "3:+10, 6:+5".to_string(),
            seed: None,
        }
    }
}

impl SimulationParams {
    /// Reject inputs the caller must not simulate.
    ///
    /// # Errors
    ///
    /// Returns [`BurndownError::InvalidDuration`] when the duration is below
    /// two days and [`BurndownError::InvalidTotalWork`] when total work is not
    /// a finite positive number.
    pub fn validate(&self) -> BurndownResult<()> {
        validate_inputs(f64::from(self.duration_days), self.total_work)
    }

    /// Duration clamped to `[2, 120]`.
    #[must_use]
    pub fn clamped_days(&self) -> usize {
        self.duration_days.clamp(MIN_DAYS, MAX_DAYS) as usize
    }

    /// Total work floored at 1.
    #[must_use]
    pub fn clamped_total(&self) -> f64 {
        self.total_work.max(1.0)
    }
}

/// Check raw duration and total-work values before building parameters.
///
/// # Errors
///
/// Returns an input rejection for a non-finite or too-short duration, or a
/// non-finite or non-positive total.
pub fn validate_inputs(duration_days: f64, total_work: f64) -> BurndownResult<()> {
    if !duration_days.is_finite() || duration_days < f64::from(MIN_DAYS) {
        return Err(BurndownError::InvalidDuration {
            value: duration_days.to_string(),
        });
    }
    if !total_work.is_finite() || total_work <= 0.0 {
        return Err(BurndownError::InvalidTotalWork {
            value: total_work.to_string(),
        });
    }
    Ok(())
}

/// Per-day parallel series produced by a run.
///
/// All four vectors have the same length.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DaySeries {
    /// Display label per day.
    pub labels: Vec<String>,
    /// Adjusted ideal remaining work.
    pub ideal: Vec<f64>,
    /// Simulated remaining work.
    pub actual: Vec<f64>,
    /// Net scope change applied on each day.
    pub scope_delta_by_day: Vec<f64>,
}

/// One day of a [`DaySeries`], with a 1-based day number.
#[derive(Debug, Clone, PartialEq)]
pub struct DayRow<'a> {
    /// 1-based day number.
    pub day: usize,
    /// Display label.
    pub label: &'a str,
    /// Adjusted ideal remaining work.
    pub ideal: f64,
    /// Simulated remaining work.
    pub actual: f64,
    /// Net scope change applied that day.
    pub scope_delta: f64,
}

impl DaySeries {
    /// Number of days.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the series holds no days.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterate the days in order.
    pub fn rows(&self) -> impl Iterator<Item = DayRow<'_>> {
        self.labels
            .iter()
            .zip(&self.ideal)
            .zip(&self.actual)
            .zip(&self.scope_delta_by_day)
            .enumerate()
            .map(|(i, (((label, &ideal), &actual), &scope_delta))| DayRow {
                day: i + 1,
                label,
                ideal,
                actual,
                scope_delta,
            })
    }
}

/// Result of one run: the series plus what the run was built from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRun {
    /// Burn model name.
    pub model: BurnModelKind,
    /// Seed the RNG was created with.
    pub seed: u64,
    /// Scope-change parse report.
    pub scope: ScopeChangeParse,
    /// Accepted scope changes that fell outside the run and were ignored.
    pub ignored_scope_changes: Vec<ScopeChange>,
    /// Per-day output.
    pub series: DaySeries,
}

/// Round to two decimal places, half away from zero. Never returns `-0.0`.
#[must_use]
pub fn round2(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Ideal remaining work on day `i` of `days` for a given total.
///
/// Decays linearly from `total` on the first day to 0 on the last.
#[must_use]
pub fn ideal_remaining(total: f64, i: usize, days: usize) -> f64 {
    if days < 2 {
        return total;
    }
    total - total * (i as f64 / (days - 1) as f64)
}

/// Unadjusted ideal line, rounded to two decimals.
#[must_use]
pub fn baseline_ideal(total: f64, days: usize) -> Vec<f64> {
    (0..days)
        .map(|i| round2(ideal_remaining(total, i, days)))
        .collect()
}

/// Sum accepted scope changes into per-day deltas.
///
/// Returns the deltas and the changes that fell outside `[1, days]`.
#[must_use]
pub fn scope_deltas(changes: &[ScopeChange], days: usize) -> (Vec<f64>, Vec<ScopeChange>) {
    let mut deltas = vec![0.0; days];
    let mut ignored = Vec::new();
    for change in changes {
        match change.day_index(days) {
            Some(idx) => deltas[idx] += change.amount,
            None => ignored.push(*change),
        }
    }
    (deltas, ignored)
}

/// Adjusted ideal line: the running total absorbs each day's scope delta.
///
/// No floor is applied, so large scope reductions can push values negative.
#[must_use]
pub fn adjusted_ideal(total: f64, deltas: &[f64]) -> Vec<f64> {
    let days = deltas.len();
    let mut total_so_far = total;
    deltas
        .iter()
        .enumerate()
        .map(|(i, delta)| {
            total_so_far += delta;
            round2(ideal_remaining(total_so_far, i, days))
        })
        .collect()
}

/// Run the simulation with an RNG seeded from `params.seed` or entropy.
#[must_use]
pub fn simulate(params: &SimulationParams) -> SimulationRun {
    let mut rng = SimRng::from_seed_or_entropy(params.seed);
    simulate_with_rng(params, &mut rng)
}

/// Run the simulation drawing variability from `rng`.
#[must_use]
pub fn simulate_with_rng(params: &SimulationParams, rng: &mut SimRng) -> SimulationRun {
    let days = params.clamped_days();
    let total = params.clamped_total();

    let scope = parse_scope_changes(&params.scope_changes_text);
    for rejected in &scope.rejected {
        tracing::warn!(token = %rejected.token, reason = %rejected.reason, "scope change dropped");
    }

    let (deltas, ignored) = scope_deltas(&scope.accepted, days);
    for change in &ignored {
        tracing::warn!(
            day = change.day,
            amount = change.amount,
            days,
            "scope change outside the run ignored"
        );
    }

    let ideal = adjusted_ideal(total, &deltas);
    if ideal.iter().any(|v| *v < 0.0) {
        tracing::warn!("scope reductions drive the adjusted ideal below zero");
    }

    let actual = simulate_actual(params, total, &deltas, rng);

    let series = DaySeries {
        labels: day_labels(params.start_date, days),
        ideal,
        actual,
        scope_delta_by_day: deltas,
    };

    tracing::info!(
        model = %params.model.kind(),
        seed = rng.master_seed(),
        days,
        total,
        final_remaining = series.actual.last().copied().unwrap_or_default(),
        "burndown simulated"
    );

    SimulationRun {
        model: params.model.kind(),
        seed: rng.master_seed(),
        scope,
        ignored_scope_changes: ignored,
        series,
    }
}

fn simulate_actual(
    params: &SimulationParams,
    total: f64,
    deltas: &[f64],
    rng: &mut SimRng,
) -> Vec<f64> {
    let days = deltas.len();
    let baseline_burn = total / (days.max(2) - 1) as f64;

    let mut remaining = total;
    let mut effective_total = total;
    let mut actual = Vec::with_capacity(days);

    for (i, &delta) in deltas.iter().enumerate() {
        if delta != 0.0 {
            remaining = (remaining + delta).max(0.0);
            effective_total += delta;
        }

        if i == 0 {
            actual.push(round2(remaining));
            continue;
        }

        let ctx = BurnContext {
            day_index: i,
            days,
            baseline_burn,
            remaining,
            effective_total,
        };
        let burn = params.model.daily_burn(&ctx, params.variability, rng);
        remaining = (remaining - burn).max(0.0);
        tracing::trace!(day = i + 1, burn, remaining, "day burned");

        actual.push(round2(remaining));
    }

    actual
}
