use serde::{Deserialize, Serialize};

/// Nominal annual interest rate applied to the savings projection,
/// compounded monthly.
pub const ANNUAL_INTEREST_RATE: f64 = 0.05;

/// Uplift applied to the projected final value to model the alternative
/// plan in the comparison chart.
pub const ALTERNATIVE_UPLIFT: f64 = 1.10;

/// One year-end sample of the projected balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsPoint {
    pub year: u32,
    pub balance: f64,
}

/// Year-by-year savings growth under fixed monthly contributions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsProjection {
    pub series: Vec<SavingsPoint>,
    pub final_value: f64,
}

/// Recommended-vs-alternative endpoints for the comparison chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanComparison {
    pub recommended: f64,
    pub alternative: f64,
}

impl SavingsProjection {
    pub fn comparison(&self) -> PlanComparison {
        PlanComparison {
            recommended: self.final_value,
            alternative: self.final_value * ALTERNATIVE_UPLIFT,
        }
    }
}

/// Projects savings growth month by month: each month accrues interest on
/// the running balance, then adds the contribution. The balance is sampled
/// at the end of every 12th month, so the series holds exactly one point
/// per year with years labeled 1..=years.
pub fn project_savings(monthly_contribution: f64, years: u32) -> SavingsProjection {
    let monthly_rate = ANNUAL_INTEREST_RATE / 12.0;
    let mut balance = 0.0_f64;
    let mut series = Vec::with_capacity(years as usize);

    for month in 1..=years * 12 {
        balance = balance * (1.0 + monthly_rate) + monthly_contribution;
        if month % 12 == 0 {
            series.push(SavingsPoint {
                year: month / 12,
                balance,
            });
        }
    }

    let final_value = series.last().map_or(0.0, |point| point.balance);
    SavingsProjection {
        series,
        final_value,
    }
}
