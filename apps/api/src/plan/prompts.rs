// Prompt constants for the plan generation pipeline.

use crate::plan::models::PlanRequest;

/// Plan prompt template. Replace `{goal}`, `{age}`, `{monthly}`, `{years}`
/// and `{target}` before sending. The numbered list is load-bearing: the
/// sectionizer relies on the response echoing the `1.`..`5.` structure.
pub const PLAN_PROMPT_TEMPLATE: &str = r#"You are a financial planner. The user has the goal: {goal}. They are {age} years old, can save {monthly} per month for {years} years to reach {target}. Provide:

1. A savings plan (is the current savings enough?).
2. Investment ideas.
3. Budget breakdown (e.g., savings, expenses, investments percentages).
4. Why this plan suits the user.
5. Alternative plans or investment options.

Keep responses concise with specific numbers."#;

/// Fills the plan template from a validated request.
pub fn build_plan_prompt(request: &PlanRequest) -> String {
    PLAN_PROMPT_TEMPLATE
        .replace("{goal}", request.goal.label())
        .replace("{age}", &request.age.to_string())
        .replace("{monthly}", &request.monthly_contribution.to_string())
        .replace("{years}", &request.years.to_string())
        .replace("{target}", &request.target_amount.to_string())
}
