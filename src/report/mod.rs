//! Presentation-side analyses built on top of a finished projection
//!
//! Nothing here feeds back into the engine.

pub mod display;
pub mod export;
pub mod inflation;
pub mod milestones;
pub mod progress;
pub mod risk;

pub use display::{format_currency, format_month_year, RequiredReturnDisplay, Severity};
pub use export::{default_file_name, export_csv, write_csv};
pub use inflation::{InflationAdjustment, DEFAULT_INFLATION_PERCENT};
pub use milestones::{milestones, progress_percent, Milestone};
pub use progress::GoalProgress;
pub use risk::{RiskAssessment, RiskFactors, RiskLevel};
