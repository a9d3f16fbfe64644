//! Bisection root finding for periodic rates
//!
//! Used to answer "what monthly return is needed from here to reach the
//! target in the months that remain".

use log::trace;

use super::state::simulate;

/// Lower edge of the bisection bracket (-10% per month)
pub const RATE_FLOOR: f64 = -0.10;

/// Upper edge of the bisection bracket (+50% per month)
pub const RATE_CEILING: f64 = 0.50;

/// Stop once the bracket is this narrow
pub const TOLERANCE: f64 = 1e-6;

/// Hard cap on bisection steps
pub const MAX_ITERATIONS: u32 = 100;

/// Find the rate at which a non-decreasing `f` reaches `target` using bisection.
///
/// The search runs over `[RATE_FLOOR, RATE_CEILING]` until the bracket is at
/// most `TOLERANCE` wide or `MAX_ITERATIONS` steps were taken, and returns the
/// bracket midpoint.
///
/// `f` must be non-decreasing over the bracket; otherwise the result is some
/// rate inside the bracket with no further guarantee. A target outside
/// `[f(RATE_FLOOR), f(RATE_CEILING)]` is not reported, the result simply
/// converges towards the nearer edge.
pub fn bisect_rate<F>(f: F, target: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    let mut low = RATE_FLOOR;
    let mut high = RATE_CEILING;
    let mut iterations = 0;

    while high - low > TOLERANCE && iterations < MAX_ITERATIONS {
        iterations += 1;
        let mid = (low + high) / 2.0;

        if f(mid) < target {
            low = mid;
        } else {
            high = mid;
        }
    }

    trace!("bisection finished after {} iterations, bracket [{}, {}]", iterations, low, high);
    (low + high) / 2.0
}

/// Periodic rate needed to grow `current_capital` to `target_capital` in
/// `remaining_periods` months, adding `periodic_contribution` each month.
///
/// Returns 0 when there is no time left or the target is already met. The
/// result is not checked for plausibility; see `report::display` for how
/// extreme values are presented.
pub fn required_rate(
    current_capital: f64,
    periodic_contribution: f64,
    target_capital: f64,
    remaining_periods: u32,
) -> f64 {
    if remaining_periods == 0 || current_capital >= target_capital {
        return 0.0;
    }

    bisect_rate(
        |rate| simulate(current_capital, periodic_contribution, rate, remaining_periods),
        target_capital,
    )
}
