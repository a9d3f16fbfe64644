//! Scenario runner for side-by-side and batch projections
//!
//! Each scenario is an independent engine call; comparison is pure
//! post-processing over the two results.

use rayon::prelude::*;
use serde::Serialize;

use crate::params::CalculatorParams;
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionResult};

/// Extra annual return (percentage points) of the default alternative scenario
pub const DEFAULT_RETURN_BUMP: f64 = 2.0;

/// Runs projections with a shared configuration
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(ProjectionConfig::starting(today));
/// let comparison = runner.compare(&base, &ScenarioComparison::default_alternative(&base));
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    pub fn new(config: ProjectionConfig) -> Self {
        Self {
            engine: ProjectionEngine::new(config),
        }
    }

    /// Run a single projection
    pub fn run(&self, params: &CalculatorParams) -> ProjectionResult {
        self.engine.project(params)
    }

    /// Run projections for many parameter sets in parallel
    pub fn run_batch(&self, scenarios: &[CalculatorParams]) -> Vec<ProjectionResult> {
        scenarios.par_iter().map(|params| self.engine.project(params)).collect()
    }

    pub fn compare(&self, base: &CalculatorParams, alternative: &CalculatorParams) -> ScenarioComparison {
        let results = self.run_batch(&[*base, *alternative]);
        ScenarioComparison::from_results(&results[0], &results[1])
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new(ProjectionConfig::default())
    }
}

/// Outcome of one side of a comparison
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioOutcome {
    pub target_month: Option<u32>,
    /// Capital at the target month
    pub capital_at_target: Option<f64>,
}

impl ScenarioOutcome {
    fn from_result(result: &ProjectionResult) -> Self {
        Self {
            target_month: result.target_month,
            capital_at_target: result.target_row().map(|r| r.capital),
        }
    }
}

/// Which scenario reaches the target first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Winner {
    Current,
    Alternative,
    Tie,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioComparison {
    pub base: ScenarioOutcome,
    pub alternative: ScenarioOutcome,
}

impl ScenarioComparison {
    /// Base scenario with a higher annual return
    pub fn default_alternative(base: &CalculatorParams) -> CalculatorParams {
        base.with_annual_return(base.annual_return + DEFAULT_RETURN_BUMP)
    }

    pub fn from_results(base: &ProjectionResult, alternative: &ProjectionResult) -> Self {
        Self {
            base: ScenarioOutcome::from_result(base),
            alternative: ScenarioOutcome::from_result(alternative),
        }
    }

    /// Months saved by the alternative (negative if it is slower).
    /// `None` unless both scenarios reach the target.
    pub fn months_saved(&self) -> Option<i64> {
        match (self.base.target_month, self.alternative.target_month) {
            (Some(base), Some(alt)) => Some(base as i64 - alt as i64),
            _ => None,
        }
    }

    /// Difference as a percentage of the base time to target
    pub fn percent_difference(&self) -> Option<f64> {
        let saved = self.months_saved()?;
        let base = self.base.target_month?;
        Some(saved.unsigned_abs() as f64 / base as f64 * 100.0)
    }

    pub fn alternative_is_faster(&self) -> bool {
        self.months_saved().is_some_and(|m| m > 0)
    }

    /// `None` unless both scenarios reach the target
    pub fn winner(&self) -> Option<Winner> {
        self.months_saved().map(|saved| match saved {
            s if s > 0 => Winner::Alternative,
            s if s < 0 => Winner::Current,
            _ => Winner::Tie,
        })
    }
}
