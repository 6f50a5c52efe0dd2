//! Pulls budget percentages out of the free-text breakdown section, one line
//! at a time. A line is attributed to the first category keyword it
//! contains (checked in a fixed order), and takes the first `N%` figure on
//! that line. Matching is case sensitive and best effort: lines that fit no
//! category or carry no percentage are skipped, never an error.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Percentage split recovered from the budget breakdown section. `found`
/// records whether any line yielded a figure; without it the zeros are
/// indistinguishable from a real all-zero split.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetSplit {
    pub savings: u32,
    pub expenses: u32,
    pub investments: u32,
    pub found: bool,
}

impl BudgetSplit {
    pub fn total(&self) -> u32 {
        self.savings + self.expenses + self.investments
    }
}

/// Scans the breakdown text line by line. Category priority is Savings,
/// then Expenses, then Investments: a line naming several categories is
/// attributed to the first one checked. Repeated lines for the same
/// category overwrite the earlier figure.
pub fn extract_budget(breakdown: &str) -> BudgetSplit {
    let percent = Regex::new(r"(\d+)%").expect("percent pattern is valid");
    let mut split = BudgetSplit::default();

    for line in breakdown.lines() {
        let slot = if line.contains("Savings") {
            &mut split.savings
        } else if line.contains("Expenses") {
            &mut split.expenses
        } else if line.contains("Investments") {
            &mut split.investments
        } else {
            continue;
        };

        if let Some(caps) = percent.captures(line) {
            if let Ok(value) = caps[1].parse::<u32>() {
                *slot = value;
                split.found = true;
            }
        }
    }

    split
}
