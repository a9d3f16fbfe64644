//! Per-row milestones for projection tables

use std::fmt;

use serde::Serialize;

use crate::params::CalculatorParams;
use crate::projection::{ProjectionResult, ProjectionRow};

/// Notable event on a row. Only the highest-priority one is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Milestone {
    TargetReached,
    Halfway,
    QuarterComplete,
    DoubledInitial,
    Breakeven,
    /// Completed year number
    Year(u32),
}

impl fmt::Display for Milestone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Milestone::TargetReached => write!(f, "Target Reached!"),
            Milestone::Halfway => write!(f, "Halfway There!"),
            Milestone::QuarterComplete => write!(f, "25% Complete"),
            Milestone::DoubledInitial => write!(f, "Doubled Initial!"),
            Milestone::Breakeven => write!(f, "Breakeven!"),
            Milestone::Year(year) => write!(f, "Year {}", year),
        }
    }
}

/// Capital as a percentage of the target
pub fn progress_percent(row: &ProjectionRow, target_capital: f64) -> f64 {
    row.capital / target_capital * 100.0
}

/// Milestone for each row of `result`, in row order.
///
/// A threshold milestone fires on the row where the value first crosses it
/// relative to the previous row; the first row fires if it is already past
/// the threshold.
pub fn milestones(result: &ProjectionResult, params: &CalculatorParams) -> Vec<Option<Milestone>> {
    let mut previous: Option<&ProjectionRow> = None;
    let mut marks = Vec::with_capacity(result.rows.len());

    for row in &result.rows {
        marks.push(milestone_for(row, previous, params));
        previous = Some(row);
    }

    marks
}

fn milestone_for(row: &ProjectionRow, previous: Option<&ProjectionRow>, params: &CalculatorParams) -> Option<Milestone> {
    let crosses = |threshold: f64| row.capital >= threshold && previous.map_or(true, |p| p.capital < threshold);
    let target = params.target_capital;

    if crosses(target) {
        Some(Milestone::TargetReached)
    } else if crosses(target * 0.5) {
        Some(Milestone::Halfway)
    } else if crosses(target * 0.25) {
        Some(Milestone::QuarterComplete)
    } else if crosses(params.initial_capital * 2.0) {
        Some(Milestone::DoubledInitial)
    } else if row.gains >= 0.0 && previous.map_or(true, |p| p.gains < 0.0) {
        Some(Milestone::Breakeven)
    } else if row.month % 12 == 0 {
        Some(Milestone::Year(row.month / 12))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::project;
    use chrono::NaiveDate;

    fn marks(params: &CalculatorParams) -> Vec<Option<Milestone>> {
        let result = project(params, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        milestones(&result, params)
    }

    #[test]
    fn test_default_plan_milestones() {
        let params = CalculatorParams::default();
        let marks = marks(&params);
        assert_eq!(marks.len(), 114);

        // Positive return, so the first row already has non-negative gains
        assert_eq!(marks[0], Some(Milestone::Breakeven));
        assert_eq!(marks[1], None);
        assert_eq!(marks[11], Some(Milestone::Year(1)));
        assert_eq!(marks[17], Some(Milestone::DoubledInitial));
        assert_eq!(marks[23], Some(Milestone::Year(2)));
        assert_eq!(marks[24], Some(Milestone::QuarterComplete));
        // Month 60 is also a year boundary; halfway takes priority
        assert_eq!(marks[59], Some(Milestone::Halfway));
        assert_eq!(marks[113], Some(Milestone::TargetReached));

        let targets = marks.iter().filter(|m| **m == Some(Milestone::TargetReached)).count();
        assert_eq!(targets, 1);
    }

    #[test]
    fn test_first_row_already_past_target() {
        let params = CalculatorParams::new(30_000.0, 100.0, 5.0, 20_000.0, Some(6));
        let marks = marks(&params);
        assert_eq!(marks[0], Some(Milestone::TargetReached));
        // Staying above the target does not fire again
        assert!(marks[1..].iter().all(|m| m.is_none()));
    }

    #[test]
    fn test_losses_never_break_even() {
        let params = CalculatorParams::new(10_000.0, 100.0, -12.0, 1_000_000.0, Some(24));
        let marks = marks(&params);
        assert_eq!(marks[0], None);
        assert_eq!(marks[11], Some(Milestone::Year(1)));
        assert_eq!(marks[23], Some(Milestone::Year(2)));
        assert_eq!(marks.iter().flatten().count(), 2);
    }

    #[test]
    fn test_labels_and_progress() {
        assert_eq!(Milestone::Year(3).to_string(), "Year 3");
        assert_eq!(Milestone::QuarterComplete.to_string(), "25% Complete");

        let params = CalculatorParams::new(10_000.0, 0.0, 0.0, 40_000.0, Some(1));
        let result = project(&params, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        assert_eq!(progress_percent(&result.rows[0], params.target_capital), 25.0);
    }
}
