//! Heuristic risk scoring of a plan

use std::fmt;

use serde::Serialize;

use crate::params::CalculatorParams;
use crate::projection::ProjectionResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl RiskLevel {
    pub fn from_score(score: u32) -> Self {
        match score {
            0..=25 => RiskLevel::Low,
            26..=50 => RiskLevel::Medium,
            51..=75 => RiskLevel::High,
            _ => RiskLevel::VeryHigh,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::VeryHigh => "Very High",
        };
        f.write_str(label)
    }
}

/// Individual risk flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFactors {
    /// Assumed return above 8%/year
    pub high_return: bool,
    /// Time frame under 5 years, or none given
    pub short_time_frame: bool,
    /// Target more than twice the money paid in over the time frame
    pub high_target: bool,
    /// Over half of the final balance is gains
    pub depends_on_gains: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub score: u32,
    pub level: RiskLevel,
    pub factors: RiskFactors,
    pub recommendations: Vec<String>,
}

impl RiskAssessment {
    pub fn assess(params: &CalculatorParams, result: &ProjectionResult) -> Self {
        // A missing time frame counts as zero months here
        let time_frame = params.target_time_frame.unwrap_or(0) as f64;
        let final_row = result.final_row();

        let factors = RiskFactors {
            high_return: params.annual_return > 8.0,
            short_time_frame: time_frame < 60.0,
            high_target: params.target_capital > (params.initial_capital + params.monthly_input * time_frame) * 2.0,
            depends_on_gains: final_row.is_some_and(|r| r.gains / r.capital > 0.5),
        };

        let mut score = 0;
        if factors.high_return {
            score += 30;
        }
        if factors.short_time_frame {
            score += 25;
        }
        if factors.high_target {
            score += 25;
        }
        if factors.depends_on_gains {
            score += 20;
        }

        let mut recommendations = Vec::new();
        if factors.high_return {
            recommendations.push(format!(
                "Your expected {}% return is optimistic. Consider more conservative estimates (5-7%).",
                params.annual_return
            ));
        }
        if factors.short_time_frame {
            recommendations.push(
                "Short timeframe increases risk. Consider extending your timeline for more stability.".to_string(),
            );
        }
        if factors.high_target {
            recommendations.push(
                "Your target is ambitious. Consider increasing monthly contributions or extending timeline."
                    .to_string(),
            );
        }
        if let Some(row) = final_row.filter(|_| factors.depends_on_gains) {
            recommendations.push(format!(
                "{:.0}% of your target depends on investment gains. Consider increasing contributions.",
                row.gains / row.capital * 100.0
            ));
        }
        if score <= 25 {
            recommendations.push(
                "Your plan looks conservative and achievable. Great job on realistic expectations!".to_string(),
            );
        }

        Self {
            score,
            level: RiskLevel::from_score(score),
            factors,
            recommendations,
        }
    }
}
