//! Compounding state for a single projection run

/// Grow `start_capital` through `periods` months.
///
/// Each month the contribution is added first and the whole balance then
/// earns `periodic_rate`. The order matters: every downstream figure assumes
/// contribution-then-return.
pub fn simulate(start_capital: f64, periodic_contribution: f64, periodic_rate: f64, periods: u32) -> f64 {
    let mut amount = start_capital;
    for _ in 0..periods {
        amount += periodic_contribution;
        amount *= 1.0 + periodic_rate;
    }
    amount
}

/// Running balance of a projection
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Months simulated so far (0 before the first step)
    pub month: u32,

    /// Balance at the end of `month`
    pub capital: f64,

    /// Monthly contribution
    pub monthly_input: f64,

    /// Monthly rate
    pub periodic_rate: f64,
}

impl ProjectionState {
    pub fn new(initial_capital: f64, monthly_input: f64, periodic_rate: f64) -> Self {
        Self {
            month: 0,
            capital: initial_capital,
            monthly_input,
            periodic_rate,
        }
    }

    /// Step one month forward and return the dollar return earned in it
    pub fn advance_month(&mut self) -> f64 {
        self.month += 1;

        let capital_before_return = self.capital + self.monthly_input;
        let monthly_return = capital_before_return * self.periodic_rate;
        self.capital = capital_before_return + monthly_return;

        monthly_return
    }
}
