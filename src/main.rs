//! Capital Projection CLI
//!
//! Command-line interface for running investment projections

use std::path::PathBuf;

use anyhow::{Context, Result};
use capital_projection::{
    params::STORAGE_KEY,
    projection::{ProjectionConfig, ProjectionEngine},
    report::{
        default_file_name, export_csv, format_currency, format_month_year, milestones, progress_percent,
        GoalProgress, InflationAdjustment, RequiredReturnDisplay, RiskAssessment, DEFAULT_INFLATION_PERCENT,
    },
    CalculatorParams, ParamsStore, ScenarioComparison, ScenarioRunner, Winner,
};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "capital-projection",
    about = "Project monthly investment growth and the return needed to hit a target"
)]
struct Cli {
    /// Saved parameter record; flags below override its values
    #[arg(long, global = true)]
    params: Option<PathBuf>,

    /// Reference month for dates (YYYY-MM), defaults to the current month
    #[arg(long, global = true, value_parser = parse_month)]
    start: Option<NaiveDate>,

    #[command(flatten)]
    overrides: ParamOverrides,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug, Default)]
struct ParamOverrides {
    /// Capital at month 0
    #[arg(long, global = true)]
    initial_capital: Option<f64>,
    /// Contribution added each month
    #[arg(long, global = true)]
    monthly_input: Option<f64>,
    /// Expected annual return in percent, e.g. 7
    #[arg(long, global = true)]
    annual_return: Option<f64>,
    #[arg(long, global = true)]
    target_capital: Option<f64>,
    /// Fixed horizon in months; estimated when omitted
    #[arg(long, global = true)]
    time_frame: Option<u32>,
}

impl ParamOverrides {
    fn apply(&self, mut params: CalculatorParams) -> CalculatorParams {
        if let Some(v) = self.initial_capital {
            params.initial_capital = v;
        }
        if let Some(v) = self.monthly_input {
            params.monthly_input = v;
        }
        if let Some(v) = self.annual_return {
            params.annual_return = v;
        }
        if let Some(v) = self.target_capital {
            params.target_capital = v;
        }
        if self.time_frame.is_some() {
            params.target_time_frame = self.time_frame;
        }
        params
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a projection and print the monthly table
    Project {
        /// Rows to print
        #[arg(long, default_value_t = 24)]
        rows: usize,
        /// Also write the full projection as CSV (pass a directory to use the default file name)
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Print the estimated months to target
    Horizon,
    /// Compare against an alternative scenario
    Compare {
        /// Alternative annual return in percent; defaults to base + 2
        #[arg(long)]
        alt_return: Option<f64>,
        #[arg(long)]
        alt_initial_capital: Option<f64>,
        #[arg(long)]
        alt_monthly_input: Option<f64>,
    },
    /// Final balance in today's money
    Inflation {
        /// Expected annual inflation in percent
        #[arg(long, default_value_t = DEFAULT_INFLATION_PERCENT)]
        rate: f64,
    },
    /// Heuristic risk assessment of the plan
    Risk,
    /// Save the effective parameters
    Save,
    /// Delete the saved parameters
    Reset,
}

fn parse_month(s: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM: {}", e))
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let store = match &cli.params {
        Some(path) => ParamsStore::new(path),
        None => ParamsStore::new(format!("{}.json", STORAGE_KEY)),
    };
    let params = cli.overrides.apply(store.load());
    let config = match cli.start {
        Some(date) => ProjectionConfig::starting(date),
        None => ProjectionConfig::default(),
    };

    match cli.command {
        Command::Save => {
            params.validate().context("refusing to save invalid parameters")?;
            store.save(&params).with_context(|| format!("saving {}", store.path().display()))?;
            println!("Saved parameters to {}", store.path().display());
        }
        Command::Reset => {
            store.reset().with_context(|| format!("removing {}", store.path().display()))?;
            println!("Parameters reset to defaults");
        }
        Command::Project { rows, csv } => {
            let params = checked(params)?;
            run_project(&params, config, rows, csv)?;
        }
        Command::Horizon => {
            let params = checked(params)?;
            match ProjectionEngine::new(config).estimate_horizon(&params) {
                Some(months) => println!(
                    "Target reached in {} months ({} years {} months)",
                    months,
                    months / 12,
                    months % 12
                ),
                None => println!("Target cannot be estimated or is unreachable within 50 years"),
            }
        }
        Command::Compare { alt_return, alt_initial_capital, alt_monthly_input } => {
            let params = checked(params)?;
            let mut alternative = ScenarioComparison::default_alternative(&params);
            if let Some(v) = alt_return {
                alternative.annual_return = v;
            }
            if let Some(v) = alt_initial_capital {
                alternative.initial_capital = v;
            }
            if let Some(v) = alt_monthly_input {
                alternative.monthly_input = v;
            }
            let comparison = ScenarioRunner::new(config).compare(&params, &alternative);
            print_comparison(&comparison);
        }
        Command::Inflation { rate } => {
            let params = checked(params)?;
            let result = ProjectionEngine::new(config).project(&params);
            match InflationAdjustment::from_result(&result, params.target_capital, rate) {
                Some(adj) => {
                    println!("Inflation Impact ({}% over {:.1} years):", adj.inflation_percent, adj.years);
                    println!("  Nominal Value:         {}", format_currency(adj.nominal_value));
                    println!("  Real Value:            {}", format_currency(adj.real_value));
                    println!("  Purchasing Power Loss: {}", format_currency(adj.purchasing_power_loss));
                    println!("  Target Real Value:     {}", format_currency(adj.target_real_value));
                    println!("  Inflation Multiplier:  {:.2}x", adj.inflation_multiplier);
                }
                None => println!("No projection rows"),
            }
        }
        Command::Risk => {
            let params = checked(params)?;
            let result = ProjectionEngine::new(config).project(&params);
            let report = RiskAssessment::assess(&params, &result);
            println!("Risk: {} (score {}/100)", report.level, report.score);
            for rec in &report.recommendations {
                println!("  - {}", rec);
            }
        }
    }

    Ok(())
}

/// Validate and echo the effective parameters
fn checked(params: CalculatorParams) -> Result<CalculatorParams> {
    params.validate().context("invalid parameters")?;
    print_params(&params);
    Ok(params)
}

fn print_params(params: &CalculatorParams) {
    println!("Initial Capital: {}", format_currency(params.initial_capital));
    println!("Monthly Input:   {}", format_currency(params.monthly_input));
    println!("Annual Return:   {}%", params.annual_return);
    println!("Target Capital:  {}", format_currency(params.target_capital));
    match params.target_time_frame {
        Some(months) => println!("Time Frame:      {} months", months),
        None => println!("Time Frame:      auto"),
    }
    println!();
}

fn run_project(params: &CalculatorParams, config: ProjectionConfig, rows: usize, csv: Option<PathBuf>) -> Result<()> {
    let start_date = config.start_date;
    let engine = ProjectionEngine::new(config);
    let result = engine.project(params);

    println!("{:>5} {:>9} {:>16} {:>16} {:>12} {:>16} {:>18} {:>6} {:>9}  {}",
        "Month", "Date", "Capital", "Contributions", "Return", "Gains", "Required", "Left", "Progress", "Milestone");
    println!("{}", "-".repeat(136));

    let marks = milestones(&result, params);
    for (row, mark) in result.rows.iter().zip(&marks).take(rows) {
        let display = RequiredReturnDisplay::for_target(row, params.target_capital);
        println!("{:>5} {:>9} {:>16} {:>16} {:>12} {:>16} {:>18} {:>6} {:>8.1}%  {}",
            row.month,
            format_month_year(row.future_date),
            format_currency(row.capital),
            format_currency(row.total_contributions),
            format_currency(row.monthly_return),
            format_currency(row.gains),
            display.to_string(),
            row.remaining_months,
            progress_percent(row, params.target_capital),
            mark.map(|m| m.to_string()).unwrap_or_default(),
        );
    }
    if result.rows.len() > rows {
        println!("... ({} more months)", result.rows.len() - rows);
    }

    let summary = result.summary();
    let progress = GoalProgress::from_result(params, &result, start_date);
    println!("\nSummary:");
    println!("  Months Projected:    {}", summary.total_months);
    println!("  Final Capital:       {}", format_currency(summary.final_capital));
    println!("  Total Contributions: {}", format_currency(summary.total_contributions));
    println!("  Total Gains:         {}", format_currency(summary.total_gains));
    println!("  Current Progress:    {:.1}%", progress.current_percent);
    match (progress.target_month, progress.target_date) {
        (Some(month), Some(date)) => println!(
            "  Target Reached:      month {} ({} years {} months, {})",
            month,
            progress.years_to_target,
            progress.extra_months_to_target,
            format_month_year(date)
        ),
        _ => println!("  Target Reached:      never"),
    }
    if let Some(ahead) = progress.months_ahead {
        if ahead >= 0 {
            println!("  Schedule:            {} months ahead", ahead);
        } else {
            println!("  Schedule:            {} months behind", -ahead);
        }
    }

    if let Some(path) = csv {
        let today = Local::now().date_naive();
        let path = if path.is_dir() { path.join(default_file_name(today)) } else { path };
        export_csv(&path, &result, params, today).with_context(|| format!("writing {}", path.display()))?;
        println!("\nFull results written to: {}", path.display());
    }

    Ok(())
}

fn print_comparison(comparison: &ScenarioComparison) {
    let describe = |month: Option<u32>, capital: Option<f64>| match (month, capital) {
        (Some(m), Some(c)) => format!("{} months (capital {})", m, format_currency(c)),
        _ => "Never".to_string(),
    };

    println!("Current:     {}", describe(comparison.base.target_month, comparison.base.capital_at_target));
    println!("Alternative: {}", describe(comparison.alternative.target_month, comparison.alternative.capital_at_target));

    if let (Some(saved), Some(pct), Some(winner)) =
        (comparison.months_saved(), comparison.percent_difference(), comparison.winner())
    {
        match winner {
            Winner::Tie => println!("Both scenarios reach the target in the same month"),
            Winner::Alternative => {
                println!("{} months faster ({:.1}% difference), Alternative scenario wins", saved.unsigned_abs(), pct)
            }
            Winner::Current => {
                println!("{} months slower ({:.1}% difference), Current scenario wins", saved.unsigned_abs(), pct)
            }
        }
    }
}
