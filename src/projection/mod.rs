//! Projection engine: compounding, time-to-target and required-return solving

mod state;
mod engine;
mod cashflows;
pub mod horizon;
pub mod solver;

/// Hard cap on projection length (50 years)
pub const MAX_MONTHS: u32 = 600;

pub use state::{simulate, ProjectionState};
pub use engine::{month_offset, project, ProjectionConfig, ProjectionEngine};
pub use cashflows::{ProjectionResult, ProjectionRow, ProjectionSummary};
pub use horizon::{estimate_horizon, estimate_horizon_within};
pub use solver::{bisect_rate, required_rate};
