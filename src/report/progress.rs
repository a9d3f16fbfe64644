//! Goal progress and time-to-target figures

use chrono::NaiveDate;
use serde::Serialize;

use crate::params::CalculatorParams;
use crate::projection::{month_offset, ProjectionResult};

/// Where the plan stands relative to its target
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    /// Share of the target already held, capped at 100
    pub current_percent: f64,
    pub target_month: Option<u32>,
    pub years_to_target: u32,
    pub extra_months_to_target: u32,
    pub target_date: Option<NaiveDate>,
    /// Months between reaching the target and a pinned time frame;
    /// positive is ahead of schedule
    pub months_ahead: Option<i64>,
}

impl GoalProgress {
    pub fn from_result(params: &CalculatorParams, result: &ProjectionResult, start_date: NaiveDate) -> Self {
        let current_percent = (params.initial_capital / params.target_capital * 100.0).min(100.0);
        let target_month = result.target_month;
        let months = target_month.unwrap_or(0);

        Self {
            current_percent,
            target_month,
            years_to_target: months / 12,
            extra_months_to_target: months % 12,
            target_date: target_month.map(|m| month_offset(start_date, m)),
            months_ahead: target_month
                .zip(params.fixed_horizon())
                .map(|(hit, frame)| frame as i64 - hit as i64),
        }
    }
}
