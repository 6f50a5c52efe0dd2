//! View assembly — turns a `PlanState` into the JSON view the form surface
//! binds its text panels and three charts to. Rendering is pure and
//! recomputed per request; every chart dataset is optional and independently
//! withheld when its inputs are unavailable.

use serde::Serialize;

use crate::plan::budget::{extract_budget, BudgetSplit};
use crate::plan::models::PlanState;
use crate::plan::projection::{PlanComparison, SavingsPoint};
use crate::plan::sectionizer::{PlanSections, NOT_PROVIDED};

/// Shown before any submission has been made.
pub const NO_PLAN_MESSAGE: &str =
    "Enter your details and click 'Plan Now' to see your visualizations!";

/// Shown while a submission is in flight.
pub const PENDING_MESSAGE: &str = "Crafting your plan...";

/// Everything the form surface needs to paint the plan panel. `status`
/// mirrors the submission lifecycle; data fields are populated only for a
/// ready plan, and `budget_split` only when a usable split was extracted.
#[derive(Debug, Clone, Serialize)]
pub struct PlanView {
    pub status: &'static str,
    pub message: Option<String>,
    pub sections: Option<PlanSections>,
    pub savings_growth: Option<Vec<SavingsPoint>>,
    pub budget_split: Option<BudgetSplit>,
    pub comparison: Option<PlanComparison>,
}

/// Renders the current submission state into a view.
pub fn render_plan(state: &PlanState) -> PlanView {
    match state {
        PlanState::NoPlan => message_view("no_plan", NO_PLAN_MESSAGE.to_string()),
        PlanState::Pending => message_view("pending", PENDING_MESSAGE.to_string()),
        PlanState::Failed { message } => message_view("failed", message.clone()),
        PlanState::Ready {
            sections,
            projection,
        } => PlanView {
            status: "ready",
            message: None,
            sections: Some(sections.clone()),
            savings_growth: Some(projection.series.clone()),
            budget_split: usable_budget(sections),
            comparison: Some(projection.comparison()),
        },
    }
}

fn message_view(status: &'static str, message: String) -> PlanView {
    PlanView {
        status,
        message: Some(message),
        sections: None,
        savings_growth: None,
        budget_split: None,
        comparison: None,
    }
}

/// The pie dataset exists only when the breakdown section resolved,
/// extraction found at least one figure, and the split sums above zero.
fn usable_budget(sections: &PlanSections) -> Option<BudgetSplit> {
    if sections.budget_breakdown == NOT_PROVIDED {
        return None;
    }
    let split = extract_budget(&sections.budget_breakdown);
    if split.found && split.total() > 0 {
        Some(split)
    } else {
        None
    }
}
