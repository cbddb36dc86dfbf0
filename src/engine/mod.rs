//! Core burndown engine.
//!
//! - Deterministic RNG (PCG, seed always reported)
//! - Lenient scope-change parsing with a rejection report
//! - Day labels
//! - Burn models, including a pluggable custom curve
//! - The day-by-day simulation loop

pub mod labels;
pub mod model;
pub mod rng;
pub mod scope;
pub mod simulator;

pub use labels::{day_labels, parse_start_date};
pub use model::{BurnContext, BurnModel, BurnModelKind, CustomBurn};
pub use rng::SimRng;
pub use scope::{parse_scope_changes, RejectReason, RejectedToken, ScopeChange, ScopeChangeParse};
pub use simulator::{
    adjusted_ideal, baseline_ideal, round2, simulate, simulate_with_rng, validate_inputs, DayRow,
    DaySeries, SimulationParams, SimulationRun, MAX_DAYS, MIN_DAYS,
};
