//! Core projection engine for month-by-month capital growth

use chrono::{Datelike, Local, Months, NaiveDate};
use log::debug;

use super::cashflows::{ProjectionResult, ProjectionRow};
use super::horizon::estimate_horizon_within;
use super::solver::required_rate;
use super::state::ProjectionState;
use super::MAX_MONTHS;
use crate::params::CalculatorParams;

/// Configuration for a projection run
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    /// Reference month; row `n` falls `n` months after it
    pub start_date: NaiveDate,

    /// Month cap when no horizon applies
    pub max_months: u32,
}

impl ProjectionConfig {
    /// Config anchored at the month containing `start_date`
    pub fn starting(start_date: NaiveDate) -> Self {
        Self {
            start_date: first_of_month(start_date),
            max_months: MAX_MONTHS,
        }
    }
}

impl Default for ProjectionConfig {
    /// Anchored at the current local month
    fn default() -> Self {
        Self::starting(Local::now().date_naive())
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// First day of the month `months` after `start`
pub fn month_offset(start: NaiveDate, months: u32) -> NaiveDate {
    first_of_month(start)
        .checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

/// Main projection engine
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with the given config
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Auto-derived horizon under this engine's month cap
    pub fn estimate_horizon(&self, params: &CalculatorParams) -> Option<u32> {
        estimate_horizon_within(params, self.config.max_months)
    }

    /// Run a full projection.
    ///
    /// The run length is the pinned time frame if there is one, else the
    /// estimated horizon, else the month cap. Without a horizon no
    /// required return is computed and the run always goes to the cap.
    pub fn project(&self, params: &CalculatorParams) -> ProjectionResult {
        let effective_horizon = match params.fixed_horizon() {
            Some(months) => Some(months),
            None => self.estimate_horizon(params),
        };
        let horizon = effective_horizon.filter(|&h| h > 0);
        let max_months = horizon.unwrap_or(self.config.max_months);

        let mut result = ProjectionResult::new(effective_horizon);
        result.rows.reserve(max_months as usize);

        let mut state = ProjectionState::new(
            params.initial_capital,
            params.monthly_input,
            params.periodic_rate(),
        );

        while state.month < max_months {
            let monthly_return = state.advance_month();
            let month = state.month;

            if result.target_month.is_none() && state.capital >= params.target_capital {
                result.target_month = Some(month);
            }

            let row = self.calculate_row(params, &state, monthly_return, horizon);
            result.add_row(row);

            // Target met and the pinned horizon exhausted
            if result.target_month.is_some() && horizon.is_some_and(|h| month >= h) {
                break;
            }
        }

        debug!(
            "projected {} months, target month {:?}, horizon {:?}",
            result.rows.len(),
            result.target_month,
            result.effective_horizon
        );

        result
    }

    fn calculate_row(
        &self,
        params: &CalculatorParams,
        state: &ProjectionState,
        monthly_return: f64,
        horizon: Option<u32>,
    ) -> ProjectionRow {
        let month = state.month;
        let total_contributions = params.initial_capital + params.monthly_input * month as f64;

        let remaining_months = horizon.map(|h| h.saturating_sub(month)).unwrap_or(0);
        let required_monthly_return = if remaining_months > 0 {
            required_rate(state.capital, params.monthly_input, params.target_capital, remaining_months)
        } else {
            0.0
        };

        ProjectionRow {
            month,
            future_date: month_offset(self.config.start_date, month),
            capital: state.capital,
            total_contributions,
            monthly_return,
            gains: state.capital - total_contributions,
            required_monthly_return,
            remaining_months,
        }
    }
}

/// Project with a fresh engine anchored at `start_date`
pub fn project(params: &CalculatorParams, start_date: NaiveDate) -> ProjectionResult {
    ProjectionEngine::new(ProjectionConfig::starting(start_date)).project(params)
}
