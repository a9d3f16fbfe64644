//! Display policy for projection figures
//!
//! Every renderer (terminal table, CSV, anything else) goes through
//! `RequiredReturnDisplay` so the required-return column reads the same
//! everywhere.

use std::fmt;

use chrono::NaiveDate;

use crate::params::periodic_to_annual;
use crate::projection::ProjectionRow;

/// Annualized required return above which the plan is shown as impossible
pub const IMPOSSIBLE_ANNUAL_PERCENT: f64 = 300.0;

/// Annualized thresholds for the severity tiers
pub const HIGH_ANNUAL_PERCENT: f64 = 20.0;
pub const ELEVATED_ANNUAL_PERCENT: f64 = 10.0;

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// How demanding a required return is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Above 20%/year
    High,
    /// Above 10%/year
    Elevated,
    Moderate,
}

impl Severity {
    fn from_annual_percent(annual_percent: f64) -> Self {
        if annual_percent > HIGH_ANNUAL_PERCENT {
            Severity::High
        } else if annual_percent > ELEVATED_ANNUAL_PERCENT {
            Severity::Elevated
        } else {
            Severity::Moderate
        }
    }
}

/// Rendered state of a row's required monthly return
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RequiredReturnDisplay {
    TargetReached,
    /// No horizon left to measure against
    None,
    Impossible,
    NoReturnNeeded,
    Rate { monthly_percent: f64, severity: Severity },
}

impl RequiredReturnDisplay {
    pub fn for_row(row: &ProjectionRow, target_reached: bool) -> Self {
        if row.remaining_months == 0 || target_reached {
            return if target_reached {
                RequiredReturnDisplay::TargetReached
            } else {
                RequiredReturnDisplay::None
            };
        }

        let annual_percent = periodic_to_annual(row.required_monthly_return) * 100.0;
        if annual_percent > IMPOSSIBLE_ANNUAL_PERCENT {
            return RequiredReturnDisplay::Impossible;
        }
        if annual_percent < 0.0 {
            return RequiredReturnDisplay::NoReturnNeeded;
        }

        RequiredReturnDisplay::Rate {
            monthly_percent: row.required_monthly_return * 100.0,
            severity: Severity::from_annual_percent(annual_percent),
        }
    }

    /// Display for a row, treating the row as reached when its own capital
    /// meets the target (a balance that falls back below it is not reached)
    pub fn for_target(row: &ProjectionRow, target_capital: f64) -> Self {
        Self::for_row(row, row.capital >= target_capital)
    }
}

impl fmt::Display for RequiredReturnDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequiredReturnDisplay::TargetReached => write!(f, "Target reached!"),
            RequiredReturnDisplay::None => write!(f, "-"),
            RequiredReturnDisplay::Impossible => write!(f, "Impossible"),
            RequiredReturnDisplay::NoReturnNeeded => write!(f, "No return needed"),
            RequiredReturnDisplay::Rate { monthly_percent, .. } => write!(f, "{:.3}%", monthly_percent),
        }
    }
}

/// "Jan 2027"
pub fn format_month_year(date: NaiveDate) -> String {
    use chrono::Datelike;
    format!("{} {}", MONTH_NAMES[date.month0() as usize], date.year())
}

/// Whole-dollar amount with thousands separators, e.g. "HK$1,234,567"
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{}HK${}", sign, grouped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::CalculatorParams;
    use crate::projection::project;

    fn row(required: f64, remaining: u32) -> ProjectionRow {
        ProjectionRow {
            month: 1,
            future_date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
            capital: 1_000.0,
            total_contributions: 1_000.0,
            monthly_return: 0.0,
            gains: 0.0,
            required_monthly_return: required,
            remaining_months: remaining,
        }
    }

    #[test]
    fn test_reached_and_none() {
        assert_eq!(RequiredReturnDisplay::for_row(&row(0.01, 5), true), RequiredReturnDisplay::TargetReached);
        assert_eq!(RequiredReturnDisplay::for_row(&row(0.01, 0), true), RequiredReturnDisplay::TargetReached);
        assert_eq!(RequiredReturnDisplay::for_row(&row(0.01, 0), false), RequiredReturnDisplay::None);
        assert_eq!(RequiredReturnDisplay::None.to_string(), "-");
    }

    #[test]
    fn test_extremes() {
        // 1.15^12 - 1 is roughly 435%
        assert_eq!(RequiredReturnDisplay::for_row(&row(0.15, 5), false), RequiredReturnDisplay::Impossible);
        assert_eq!(RequiredReturnDisplay::for_row(&row(-0.01, 5), false), RequiredReturnDisplay::NoReturnNeeded);
    }

    #[test]
    fn test_severity_tiers() {
        // 2%/month is about 26.8%/year
        match RequiredReturnDisplay::for_row(&row(0.02, 5), false) {
            RequiredReturnDisplay::Rate { severity, .. } => assert_eq!(severity, Severity::High),
            other => panic!("unexpected {:?}", other),
        }
        // 1%/month is about 12.7%/year
        match RequiredReturnDisplay::for_row(&row(0.01, 5), false) {
            RequiredReturnDisplay::Rate { severity, .. } => assert_eq!(severity, Severity::Elevated),
            other => panic!("unexpected {:?}", other),
        }
        let moderate = RequiredReturnDisplay::for_row(&row(0.005, 5), false);
        assert_eq!(
            moderate,
            RequiredReturnDisplay::Rate { monthly_percent: 0.5, severity: Severity::Moderate }
        );
        assert_eq!(moderate.to_string(), "0.500%");
    }

    #[test]
    fn test_falling_back_below_target_is_not_reached() {
        // Shrinking balance: over the target in month 1, below it from month 3
        let params = CalculatorParams::new(20_000.0, 1_000.0, -60.0, 19_900.0, Some(12));
        let result = project(&params, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        assert_eq!(result.target_month, Some(1));

        let first = &result.rows[0];
        assert_eq!(RequiredReturnDisplay::for_target(first, params.target_capital), RequiredReturnDisplay::TargetReached);

        let third = &result.rows[2];
        assert!(third.capital < params.target_capital);
        assert!(third.required_monthly_return < 0.0);
        assert_eq!(
            RequiredReturnDisplay::for_target(third, params.target_capital),
            RequiredReturnDisplay::NoReturnNeeded
        );
    }

    #[test]
    fn test_format_month_year() {
        assert_eq!(format_month_year(NaiveDate::from_ymd_opt(2027, 1, 1).unwrap()), "Jan 2027");
        assert_eq!(format_month_year(NaiveDate::from_ymd_opt(2030, 12, 1).unwrap()), "Dec 2030");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "HK$0");
        assert_eq!(format_currency(999.4), "HK$999");
        assert_eq!(format_currency(1_000.0), "HK$1,000");
        assert_eq!(format_currency(1_234_567.8), "HK$1,234,568");
        assert_eq!(format_currency(-25_000.0), "-HK$25,000");
    }
}
