//! Calculator input parameters
//!
//! A `CalculatorParams` value is the only input of the projection engine. It is
//! immutable per call; the engine never validates it and degrades through
//! sentinel results instead (see `projection`).

pub mod loader;

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, Result};

pub use loader::{ParamsStore, STORAGE_KEY};

/// Months in a year, used for annual to periodic rate conversion
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Inputs for a single projection run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CalculatorParams {
    /// Capital at month 0
    pub initial_capital: f64,

    /// Contribution added every month before that month's return is applied
    pub monthly_input: f64,

    /// Annual return in percent (7.0 means 7%/year)
    pub annual_return: f64,

    /// Goal balance
    pub target_capital: f64,

    /// Fixed horizon in months; auto-estimated when absent
    pub target_time_frame: Option<u32>,
}

impl Default for CalculatorParams {
    fn default() -> Self {
        Self {
            initial_capital: 10_000.0,
            monthly_input: 500.0,
            annual_return: 7.0,
            target_capital: 100_000.0,
            target_time_frame: None,
        }
    }
}

impl CalculatorParams {
    pub fn new(
        initial_capital: f64,
        monthly_input: f64,
        annual_return: f64,
        target_capital: f64,
        target_time_frame: Option<u32>,
    ) -> Self {
        Self {
            initial_capital,
            monthly_input,
            annual_return,
            target_capital,
            target_time_frame,
        }
    }

    /// Periodic (monthly) rate: `annual_return / 100 / 12`
    pub fn periodic_rate(&self) -> f64 {
        annual_percent_to_periodic(self.annual_return)
    }

    /// Fixed horizon if one was pinned and is positive
    pub fn fixed_horizon(&self) -> Option<u32> {
        self.target_time_frame.filter(|&months| months > 0)
    }

    /// Copy of these params with a different annual return
    pub fn with_annual_return(self, annual_return: f64) -> Self {
        Self {
            annual_return,
            ..self
        }
    }

    /// Reject inputs the engine is not meant to be driven with.
    ///
    /// The engine accepts anything finite; this is for the CLI and for
    /// persisted records before they are shown back to a user.
    pub fn validate(&self) -> Result<()> {
        let finite = [
            ("initialCapital", self.initial_capital),
            ("monthlyInput", self.monthly_input),
            ("annualReturn", self.annual_return),
            ("targetCapital", self.target_capital),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(CalcError::invalid(field, format!("must be finite, got {}", value)));
            }
        }

        if self.initial_capital < 0.0 {
            return Err(CalcError::invalid("initialCapital", "must not be negative"));
        }
        if self.target_capital <= 0.0 {
            return Err(CalcError::invalid("targetCapital", "must be positive"));
        }
        if self.target_time_frame == Some(0) {
            return Err(CalcError::invalid("targetTimeFrame", "must be positive when set"));
        }

        Ok(())
    }
}

/// Convert an annual percentage to a monthly periodic rate
pub fn annual_percent_to_periodic(annual_percent: f64) -> f64 {
    annual_percent / 100.0 / MONTHS_PER_YEAR
}

/// Annualize a periodic (monthly) rate: `(1 + r)^12 - 1`
pub fn periodic_to_annual(periodic_rate: f64) -> f64 {
    (1.0 + periodic_rate).powi(12) - 1.0
}

/// Zero or NaN counts as "not provided" for horizon estimation
pub fn is_unset(value: f64) -> bool {
    value == 0.0 || value.is_nan()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_periodic_rate() {
        let params = CalculatorParams::default();
        assert_relative_eq!(params.periodic_rate(), 0.07 / 12.0);
    }

    #[test]
    fn test_annualize_round_trip_of_one_percent_monthly() {
        assert_relative_eq!(periodic_to_annual(0.01), 1.01_f64.powi(12) - 1.0);
        assert_relative_eq!(periodic_to_annual(0.0), 0.0);
    }

    #[test]
    fn test_fixed_horizon_ignores_zero() {
        let mut params = CalculatorParams::default();
        assert_eq!(params.fixed_horizon(), None);
        params.target_time_frame = Some(0);
        assert_eq!(params.fixed_horizon(), None);
        params.target_time_frame = Some(36);
        assert_eq!(params.fixed_horizon(), Some(36));
    }

    #[test]
    fn test_is_unset() {
        assert!(is_unset(0.0));
        assert!(is_unset(-0.0));
        assert!(is_unset(f64::NAN));
        assert!(!is_unset(0.01));
        assert!(!is_unset(-5.0));
    }

    #[test]
    fn test_validate() {
        assert!(CalculatorParams::default().validate().is_ok());

        let negative = CalculatorParams { initial_capital: -1.0, ..Default::default() };
        assert!(matches!(
            negative.validate(),
            Err(CalcError::InvalidParams { field: "initialCapital", .. })
        ));

        let no_target = CalculatorParams { target_capital: 0.0, ..Default::default() };
        assert!(no_target.validate().is_err());

        let infinite = CalculatorParams { monthly_input: f64::INFINITY, ..Default::default() };
        assert!(infinite.validate().is_err());

        let zero_frame = CalculatorParams { target_time_frame: Some(0), ..Default::default() };
        assert!(zero_frame.validate().is_err());
    }

    #[test]
    fn test_partial_record_merges_over_defaults() {
        let params: CalculatorParams =
            serde_json::from_str(r#"{"monthlyInput": 250, "targetTimeFrame": 48}"#).unwrap();
        assert_eq!(params.initial_capital, 10_000.0);
        assert_eq!(params.monthly_input, 250.0);
        assert_eq!(params.target_time_frame, Some(48));
    }
}
