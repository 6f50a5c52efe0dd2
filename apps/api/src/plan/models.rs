#![allow(dead_code)]

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::plan::projection::SavingsProjection;
use crate::plan::sectionizer::PlanSections;

pub const MIN_AGE: u32 = 18;
pub const MAX_AGE: u32 = 100;
pub const MIN_YEARS: u32 = 1;
pub const MAX_YEARS: u32 = 50;

/// What the user is saving toward. `Other` carries free-form text that goes
/// into the prompt as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    Retirement,
    House,
    Car,
    Gold,
    Marriage,
    Other(String),
}

impl Goal {
    /// Human-readable label used in the prompt.
    pub fn label(&self) -> &str {
        match self {
            Goal::Retirement => "Retirement",
            Goal::House => "House",
            Goal::Car => "Car",
            Goal::Gold => "Gold",
            Goal::Marriage => "Marriage",
            Goal::Other(text) => text,
        }
    }
}

/// A plan submission. Numeric ranges are enforced at the API boundary via
/// [`PlanRequest::validate`]; downstream steps assume they hold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRequest {
    pub goal: Goal,
    pub age: u32,
    pub target_amount: f64,
    pub years: u32,
    pub monthly_contribution: f64,
}

impl PlanRequest {
    pub fn new(
        goal: Goal,
        age: u32,
        target_amount: f64,
        years: u32,
        monthly_contribution: f64,
    ) -> Result<Self, AppError> {
        let request = Self {
            goal,
            age,
            target_amount,
            years,
            monthly_contribution,
        };
        request.validate()?;
        Ok(request)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.age < MIN_AGE || self.age > MAX_AGE {
            return Err(AppError::Validation(format!(
                "age must be between {MIN_AGE} and {MAX_AGE}"
            )));
        }
        if self.years < MIN_YEARS || self.years > MAX_YEARS {
            return Err(AppError::Validation(format!(
                "years must be between {MIN_YEARS} and {MAX_YEARS}"
            )));
        }
        if self.target_amount < 0.0 {
            return Err(AppError::Validation(
                "target_amount must be non-negative".to_string(),
            ));
        }
        if self.monthly_contribution < 0.0 {
            return Err(AppError::Validation(
                "monthly_contribution must be non-negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// Lifecycle of the most recent submission, as the render step sees it.
/// There is exactly one state at a time; a failed submission carries only
/// the provider's message and no partial plan.
#[derive(Debug, Clone)]
pub enum PlanState {
    NoPlan,
    Pending,
    Ready {
        sections: PlanSections,
        projection: SavingsProjection,
    },
    Failed {
        message: String,
    },
}
