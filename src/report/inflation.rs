//! Inflation post-transform over a finished projection

use serde::Serialize;

use crate::projection::ProjectionResult;

/// Default expected annual inflation, in percent
pub const DEFAULT_INFLATION_PERCENT: f64 = 3.0;

/// Final balance expressed in today's money
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InflationAdjustment {
    pub inflation_percent: f64,
    pub years: f64,
    pub inflation_multiplier: f64,
    pub nominal_value: f64,
    pub real_value: f64,
    pub purchasing_power_loss: f64,
    pub target_real_value: f64,
}

impl InflationAdjustment {
    /// Deflate the last row of `result`. `None` for an empty projection.
    pub fn from_result(result: &ProjectionResult, target_capital: f64, inflation_percent: f64) -> Option<Self> {
        let last = result.final_row()?;

        let years = last.month as f64 / 12.0;
        let inflation_multiplier = (1.0 + inflation_percent / 100.0).powf(years);
        let real_value = last.capital / inflation_multiplier;

        Some(Self {
            inflation_percent,
            years,
            inflation_multiplier,
            nominal_value: last.capital,
            real_value,
            purchasing_power_loss: last.capital - real_value,
            target_real_value: target_capital / inflation_multiplier,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::CalculatorParams;
    use crate::projection::project;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    #[test]
    fn test_two_years_at_three_percent() {
        let params = CalculatorParams::new(10_000.0, 500.0, 7.0, 100_000.0, Some(24));
        let result = project(&params, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());

        let adj = InflationAdjustment::from_result(&result, params.target_capital, 3.0).unwrap();
        assert_relative_eq!(adj.years, 2.0);
        assert_relative_eq!(adj.inflation_multiplier, 1.0609, max_relative = 1e-12);
        assert_relative_eq!(adj.real_value * adj.inflation_multiplier, adj.nominal_value, max_relative = 1e-12);
        assert_relative_eq!(adj.purchasing_power_loss, adj.nominal_value - adj.real_value);
        assert_relative_eq!(adj.target_real_value, 100_000.0 / 1.0609, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_inflation_is_identity() {
        let params = CalculatorParams::new(10_000.0, 500.0, 7.0, 100_000.0, Some(12));
        let result = project(&params, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());

        let adj = InflationAdjustment::from_result(&result, params.target_capital, 0.0).unwrap();
        assert_eq!(adj.real_value, adj.nominal_value);
        assert_eq!(adj.purchasing_power_loss, 0.0);
    }

    #[test]
    fn test_empty_projection() {
        let result = ProjectionResult::new(None);
        assert!(InflationAdjustment::from_result(&result, 1.0, 3.0).is_none());
    }
}
