//! Projection output structures

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One simulated month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionRow {
    /// Projection month (1-indexed)
    pub month: u32,

    /// Calendar month this row falls in (first day of the month)
    pub future_date: NaiveDate,

    /// Balance after this month's contribution and return
    pub capital: f64,

    /// Initial capital plus all contributions so far, without growth
    pub total_contributions: f64,

    /// Dollar return earned this month
    pub monthly_return: f64,

    /// `capital - total_contributions`
    pub gains: f64,

    /// Periodic rate needed from this row to hit the target by the horizon
    pub required_monthly_return: f64,

    /// Months left until the horizon, 0 without one
    pub remaining_months: u32,
}

/// Complete projection result
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    /// Monthly rows, month 1 first
    pub rows: Vec<ProjectionRow>,

    /// First month whose capital meets the target
    pub target_month: Option<u32>,

    /// Horizon used for the run, pinned or estimated
    pub effective_horizon: Option<u32>,
}

impl ProjectionResult {
    pub fn new(effective_horizon: Option<u32>) -> Self {
        Self {
            rows: Vec::new(),
            target_month: None,
            effective_horizon,
        }
    }

    /// Add a row
    pub fn add_row(&mut self, row: ProjectionRow) {
        self.rows.push(row);
    }

    /// Row for a 1-indexed month
    pub fn row(&self, month: u32) -> Option<&ProjectionRow> {
        if month == 0 {
            return None;
        }
        self.rows.get(month as usize - 1)
    }

    pub fn final_row(&self) -> Option<&ProjectionRow> {
        self.rows.last()
    }

    /// Row at which the target was first met
    pub fn target_row(&self) -> Option<&ProjectionRow> {
        self.target_month.and_then(|m| self.row(m))
    }

    pub fn is_target_reached_by(&self, month: u32) -> bool {
        self.target_month.is_some_and(|m| m <= month)
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let total_returns: f64 = self.rows.iter().map(|r| r.monthly_return).sum();
        let final_row = self.final_row();

        ProjectionSummary {
            total_months: self.rows.len() as u32,
            final_capital: final_row.map(|r| r.capital).unwrap_or(0.0),
            total_contributions: final_row.map(|r| r.total_contributions).unwrap_or(0.0),
            total_gains: final_row.map(|r| r.gains).unwrap_or(0.0),
            total_returns,
            target_month: self.target_month,
            target_date: self.target_row().map(|r| r.future_date),
            effective_horizon: self.effective_horizon,
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    pub total_months: u32,
    pub final_capital: f64,
    pub total_contributions: f64,
    pub total_gains: f64,
    pub total_returns: f64,
    pub target_month: Option<u32>,
    pub target_date: Option<NaiveDate>,
    pub effective_horizon: Option<u32>,
}
