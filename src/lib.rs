//! # burndown
//!
//! Reproducible project burndown projection.
//!
//! Given a duration, a total amount of work and a list of scope changes,
//! burndown computes an ideal line that absorbs scope changes and a
//! simulated actual line under a linear, realistic (noisy) or custom burn
//! model. Results render as a table, a text chart, CSV or JSON.
//!
//! ## Example
//!
//! ```rust
//! use burndown::prelude::*;
//!
//! let config = BurndownConfig::builder()
//!     .duration_days(10.0)
//!     .total_work(100.0)
//!     .model(BurnModelKind::Linear)
//!     .scope_changes("3:+10, 6:+5")
//!     .seed(42)
//!     .build();
//!
//! let run = simulate(&config.to_params());
//! assert_eq!(run.series.len(), 10);
//! assert_eq!(run.series.ideal[0], 100.0);
//! assert_eq!(run.seed, 42);
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::suboptimal_flops,
    clippy::imprecise_flops,
    clippy::too_many_lines,
    clippy::missing_const_for_fn,  // Many functions can't be const in stable Rust
    clippy::needless_range_loop,   // Sometimes range loops are clearer
)]

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod report;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{BurndownConfig, BurndownConfigBuilder};
    pub use crate::engine::rng::SimRng;
    pub use crate::engine::{
        parse_scope_changes, simulate, simulate_with_rng, BurnModel, BurnModelKind, CustomBurn,
        DaySeries, ScopeChange, SimulationParams, SimulationRun,
    };
    pub use crate::error::{BurndownError, BurndownResult};
    pub use crate::report::{render, BurndownSummary, DayStatus, OutputFormat};
}

/// Re-export for public API
pub use error::{BurndownError, BurndownResult};
