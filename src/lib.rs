//! Capital Projection - month-by-month growth of a periodic investment
//!
//! This library provides:
//! - Forward projection of an initial lump sum plus fixed monthly contributions
//! - Time-to-target estimation, capped at 50 years
//! - Required monthly return from any month to hit the target on a fixed horizon
//! - Presentation helpers (display policy, CSV export, inflation, risk, progress)
//! - Scenario comparison and batch runs

pub mod error;
pub mod params;
pub mod projection;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use error::CalcError;
pub use params::{CalculatorParams, ParamsStore};
pub use projection::{
    estimate_horizon, project, ProjectionConfig, ProjectionEngine, ProjectionResult, ProjectionRow,
};
pub use scenario::{ScenarioComparison, ScenarioRunner, Winner};
