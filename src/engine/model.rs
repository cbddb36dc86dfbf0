//! Burn models.
//!
//! A burn model decides how much work is completed on each day after the
//! first. `linear` burns the baseline rate, `realistic` perturbs it by a
//! bounded uniform draw, and `custom` delegates to a caller-supplied curve.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use super::rng::SimRng;
use crate::error::BurndownError;

/// Upper bound for the `realistic` variability, in percent.
pub const MAX_VARIABILITY_PERCENT: f64 = 60.0;

/// Serializable burn model name, as used in configuration and on the CLI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BurnModelKind {
    /// Constant baseline burn.
    Linear,
    /// Baseline burn with uniform variability.
    #[default]
    Realistic,
    /// Caller-supplied burn curve.
    Custom,
}

impl FromStr for BurnModelKind {
    type Err = BurndownError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "realistic" => Ok(Self::Realistic),
            "custom" => Ok(Self::Custom),
            other => Err(BurndownError::UnknownModel {
                name: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for BurnModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Linear => "linear",
            Self::Realistic => "realistic",
            Self::Custom => "custom",
        })
    }
}

/// Everything a burn curve may look at when deciding a day's burn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurnContext {
    /// 0-based day index (always at least 1; day 0 never burns).
    pub day_index: usize,
    /// Total number of days in the run.
    pub days: usize,
    /// Constant per-day burn derived from the original total.
    pub baseline_burn: f64,
    /// Remaining work before this day's burn.
    pub remaining: f64,
    /// Total work including scope changes applied so far.
    pub effective_total: f64,
}

type BurnCurve = dyn Fn(&BurnContext) -> f64 + Send + Sync;

/// Pluggable burn strategy for the `custom` model.
///
/// Without a curve it burns the baseline rate.
#[derive(Clone, Default)]
pub struct CustomBurn {
    curve: Option<Arc<BurnCurve>>,
}

impl CustomBurn {
    /// A custom model with no curve; burns the baseline rate.
    #[must_use]
    pub fn baseline() -> Self {
        Self::default()
    }

    /// A custom model driven by `curve`.
    #[must_use]
    pub fn from_fn<F>(curve: F) -> Self
    where
        F: Fn(&BurnContext) -> f64 + Send + Sync + 'static,
    {
        Self {
            curve: Some(Arc::new(curve)),
        }
    }

    /// Whether a curve has been supplied.
    #[must_use]
    pub fn has_curve(&self) -> bool {
        self.curve.is_some()
    }

    fn burn(&self, ctx: &BurnContext) -> f64 {
        let Some(curve) = &self.curve else {
            return ctx.baseline_burn;
        };
        let burn = curve(ctx);
        if burn.is_finite() {
            burn.max(0.0)
        } else {
            tracing::warn!(
                day = ctx.day_index + 1,
                burn,
                "custom burn curve returned a non-finite value, using baseline"
            );
            ctx.baseline_burn
        }
    }
}

impl fmt::Debug for CustomBurn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomBurn")
            .field("curve", &self.curve.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// Burn model used by the simulator.
#[derive(Debug, Clone, Default)]
pub enum BurnModel {
    /// Burn exactly the baseline rate each day.
    Linear,
    /// Burn `baseline * (1 + r * v)` with `r` uniform in `[-1, 1)`.
    #[default]
    Realistic,
    /// Burn whatever the supplied strategy returns.
    Custom(CustomBurn),
}

impl BurnModel {
    /// The serializable name of this model.
    #[must_use]
    pub const fn kind(&self) -> BurnModelKind {
        match self {
            Self::Linear => BurnModelKind::Linear,
            Self::Realistic => BurnModelKind::Realistic,
            Self::Custom(_) => BurnModelKind::Custom,
        }
    }

    /// Whether repeated runs with different seeds can differ.
    #[must_use]
    pub const fn is_stochastic(&self) -> bool {
        matches!(self, Self::Realistic)
    }

    /// Work burned on the day described by `ctx`.
    ///
    /// `variability` is a percentage, clamped to `[0, 60]`. The RNG is only
    /// consumed by the `realistic` model, once per call.
    pub fn daily_burn(&self, ctx: &BurnContext, variability: f64, rng: &mut SimRng) -> f64 {
        match self {
            Self::Linear => ctx.baseline_burn,
            Self::Realistic => {
                let v = clamp_variability(variability) / 100.0;
                let r = rng.gen_signed_unit();
                (ctx.baseline_burn * (1.0 + r * v)).max(0.0)
            }
            Self::Custom(custom) => custom.burn(ctx),
        }
    }
}

impl From<BurnModelKind> for BurnModel {
    fn from(kind: BurnModelKind) -> Self {
        match kind {
            BurnModelKind::Linear => Self::Linear,
            BurnModelKind::Realistic => Self::Realistic,
            BurnModelKind::Custom => Self::Custom(CustomBurn::baseline()),
        }
    }
}

/// Clamp a variability percentage to `[0, 60]`. NaN maps to 0.
#[must_use]
pub fn clamp_variability(variability: f64) -> f64 {
    if variability.is_nan() {
        return 0.0;
    }
    variability.clamp(0.0, MAX_VARIABILITY_PERCENT)
}
