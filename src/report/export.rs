//! CSV export of a projection

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::NaiveDate;
use log::info;

use super::display::format_month_year;
use super::milestones::progress_percent;
use crate::error::Result;
use crate::params::CalculatorParams;
use crate::projection::ProjectionResult;

pub const CSV_HEADERS: [&str; 9] = [
    "Month",
    "Date",
    "Total Capital",
    "Total Contributions",
    "Monthly Return",
    "Investment Gains",
    "Required Monthly Return (%)",
    "Progress to Target (%)",
    "Remaining Months",
];

/// `investment-projection-2026-10-18.csv`
pub fn default_file_name(export_date: NaiveDate) -> String {
    format!("investment-projection-{}.csv", export_date.format("%Y-%m-%d"))
}

/// Write the parameter preamble followed by one CSV record per row
pub fn write_csv<W: Write>(
    mut out: W,
    result: &ProjectionResult,
    params: &CalculatorParams,
    export_date: NaiveDate,
) -> Result<()> {
    let time_frame = params
        .fixed_horizon()
        .map(|m| m.to_string())
        .unwrap_or_else(|| "Auto-calculated".to_string());

    writeln!(out, "Investment Calculator Export - {}", export_date.format("%Y-%m-%d"))?;
    writeln!(out, "Initial Capital: {}", params.initial_capital)?;
    writeln!(out, "Monthly Input: {}", params.monthly_input)?;
    writeln!(out, "Annual Return: {}%", params.annual_return)?;
    writeln!(out, "Target Capital: {}", params.target_capital)?;
    writeln!(out, "Target Timeframe: {} months", time_frame)?;
    writeln!(out)?;

    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(CSV_HEADERS)?;

    for row in &result.rows {
        writer.write_record(&[
            row.month.to_string(),
            format_month_year(row.future_date),
            format!("{:.2}", row.capital),
            format!("{:.2}", row.total_contributions),
            format!("{:.2}", row.monthly_return),
            format!("{:.2}", row.gains),
            format!("{:.3}", row.required_monthly_return * 100.0),
            format!("{:.1}", progress_percent(row, params.target_capital)),
            row.remaining_months.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Export to a file at `path`
pub fn export_csv<P: AsRef<Path>>(
    path: P,
    result: &ProjectionResult,
    params: &CalculatorParams,
    export_date: NaiveDate,
) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_csv(BufWriter::new(file), result, params, export_date)?;
    info!("Wrote {} rows to {}", result.rows.len(), path.as_ref().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::project;

    fn export_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn test_default_file_name() {
        assert_eq!(default_file_name(export_date()), "investment-projection-2026-10-18.csv");
    }

    #[test]
    fn test_csv_layout() {
        let params = CalculatorParams::new(10_000.0, 500.0, 7.0, 100_000.0, Some(3));
        let result = project(&params, export_date());

        let mut buf = Vec::new();
        write_csv(&mut buf, &result, &params, export_date()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Investment Calculator Export - 2026-10-18");
        assert_eq!(lines[3], "Annual Return: 7%");
        assert_eq!(lines[5], "Target Timeframe: 3 months");
        assert_eq!(lines[6], "");
        assert!(lines[7].starts_with("Month,Date,Total Capital"));
        assert_eq!(lines.len(), 8 + 3);

        let first: Vec<&str> = lines[8].split(',').collect();
        assert_eq!(first[0], "1");
        assert_eq!(first[1], "Nov 2026");
        // (10000 + 500) * (1 + 0.07 / 12)
        assert_eq!(first[2], "10561.25");
        assert_eq!(first[3], "10500.00");
        assert_eq!(first[8], "2");

        let last: Vec<&str> = lines[10].split(',').collect();
        assert_eq!(last[8], "0");
        assert_eq!(last[6], "0.000");
    }

    #[test]
    fn test_auto_time_frame_label() {
        let params = CalculatorParams::default();
        let result = project(&params, export_date());

        let mut buf = Vec::new();
        write_csv(&mut buf, &result, &params, export_date()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Target Timeframe: Auto-calculated months"));
    }

    #[test]
    fn test_zero_time_frame_is_auto() {
        let params = CalculatorParams::new(10_000.0, 500.0, 7.0, 100_000.0, Some(0));
        let result = project(&params, export_date());

        let mut buf = Vec::new();
        write_csv(&mut buf, &result, &params, export_date()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Target Timeframe: Auto-calculated months"));
        assert!(!text.contains("Target Timeframe: 0 months"));
    }
}
