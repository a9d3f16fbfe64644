//! Time-to-target estimation

use log::debug;

use super::MAX_MONTHS;
use crate::params::{is_unset, CalculatorParams};

/// Months needed to reach the target, capped at `MAX_MONTHS` (50 years).
///
/// `None` means either the inputs are degenerate or the target is out of
/// reach within the cap.
pub fn estimate_horizon(params: &CalculatorParams) -> Option<u32> {
    estimate_horizon_within(params, MAX_MONTHS)
}

/// Same as `estimate_horizon` with an explicit month cap.
///
/// A zero initial capital, target or annual return is treated as missing and
/// yields `None` straight away. Returns `Some(0)` if the initial capital
/// already meets the target.
pub fn estimate_horizon_within(params: &CalculatorParams, max_months: u32) -> Option<u32> {
    if is_unset(params.initial_capital) || is_unset(params.target_capital) || is_unset(params.annual_return) {
        debug!("horizon estimate skipped: initial capital, target or return not set");
        return None;
    }

    let rate = params.periodic_rate();
    let mut capital = params.initial_capital;
    let mut month = 0;

    while month < max_months && capital < params.target_capital {
        month += 1;
        capital += params.monthly_input;
        capital *= 1.0 + rate;
    }

    if capital >= params.target_capital {
        Some(month)
    } else {
        debug!("target {} unreachable within {} months", params.target_capital, max_months);
        None
    }
}
