//! Axum route handlers for the Plan API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::plan::generator::run_plan_pipeline;
use crate::plan::models::{PlanRequest, PlanState, MAX_YEARS, MIN_YEARS};
use crate::plan::projection::{project_savings, PlanComparison, SavingsPoint};
use crate::render::{render_plan, PlanView};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ProjectionRequest {
    pub monthly_contribution: f64,
    pub years: u32,
}

impl ProjectionRequest {
    fn validate(&self) -> Result<(), AppError> {
        if self.years < MIN_YEARS || self.years > MAX_YEARS {
            return Err(AppError::Validation(format!(
                "years must be between {MIN_YEARS} and {MAX_YEARS}"
            )));
        }
        if self.monthly_contribution < 0.0 {
            return Err(AppError::Validation(
                "monthly_contribution must be non-negative".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct ProjectionResponse {
    pub savings_growth: Vec<SavingsPoint>,
    pub final_value: f64,
    pub comparison: PlanComparison,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/plan
///
/// Full plan pipeline: validate → prompt → provider → sectionize → project.
/// Returns the ready view; a provider failure surfaces as 502 with the
/// provider's message and no partial plan.
pub async fn handle_generate_plan(
    State(state): State<AppState>,
    Json(request): Json<PlanRequest>,
) -> Result<Json<PlanView>, AppError> {
    request.validate()?;

    match run_plan_pipeline(state.provider.as_ref(), &request).await {
        PlanState::Failed { message } => Err(AppError::Provider(message)),
        plan => Ok(Json(render_plan(&plan))),
    }
}

/// POST /api/v1/plan/projection
///
/// Deterministic projection only — no provider call. Lets the form surface
/// re-chart savings growth as the user tweaks sliders.
pub async fn handle_projection(
    Json(request): Json<ProjectionRequest>,
) -> Result<Json<ProjectionResponse>, AppError> {
    request.validate()?;

    let projection = project_savings(request.monthly_contribution, request.years);

    Ok(Json(ProjectionResponse {
        comparison: projection.comparison(),
        final_value: projection.final_value,
        savings_growth: projection.series,
    }))
}

/// GET /api/v1/plan
///
/// The view before any submission. The server keeps no per-session plan
/// state, so this always renders the placeholder.
pub async fn handle_plan_placeholder() -> Json<PlanView> {
    Json(render_plan(&PlanState::NoPlan))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use async_trait::async_trait;

    use crate::llm_client::{LlmError, TextGenerator};
    use crate::plan::models::Goal;

    struct ScriptedProvider {
        text: &'static str,
    }

    #[async_trait]
    impl TextGenerator for ScriptedProvider {
        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            Ok(self.text.to_string())
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl TextGenerator for FailingProvider {
        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            Err(LlmError::EmptyContent)
        }
    }

    fn make_state(provider: impl TextGenerator + 'static) -> AppState {
        AppState {
            provider: Arc::new(provider),
        }
    }

    fn make_plan_request() -> PlanRequest {
        PlanRequest {
            goal: Goal::Retirement,
            age: 40,
            target_amount: 200_000.0,
            years: 20,
            monthly_contribution: 800.0,
        }
    }

    #[tokio::test]
    async fn test_generate_plan_returns_ready_view() {
        let state = make_state(ScriptedProvider {
            text: "1. Save more. 2. Funds. 3. Savings: 40%. 4. Fits. 5. Bonds.",
        });
        let response = handle_generate_plan(State(state), Json(make_plan_request()))
            .await
            .unwrap();
        assert_eq!(response.0.status, "ready");
        assert_eq!(response.0.savings_growth.as_ref().unwrap().len(), 20);
    }

    #[tokio::test]
    async fn test_generate_plan_rejects_invalid_request() {
        let state = make_state(ScriptedProvider { text: "unused" });
        let mut request = make_plan_request();
        request.age = 12;
        let result = handle_generate_plan(State(state), Json(request)).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_generate_plan_surfaces_provider_failure() {
        let state = make_state(FailingProvider);
        let result = handle_generate_plan(State(state), Json(make_plan_request())).await;
        match result {
            Err(AppError::Provider(message)) => {
                assert_eq!(message, "LLM returned empty content");
            }
            other => panic!("Expected Provider error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_projection_endpoint_is_deterministic() {
        let request = ProjectionRequest {
            monthly_contribution: 1000.0,
            years: 1,
        };
        let response = handle_projection(Json(request)).await.unwrap();
        assert!((response.0.final_value - 12_278.86).abs() < 0.01);
        assert_eq!(response.0.savings_growth.len(), 1);
    }

    #[tokio::test]
    async fn test_projection_endpoint_validates_years() {
        let request = ProjectionRequest {
            monthly_contribution: 100.0,
            years: 0,
        };
        let result = handle_projection(Json(request)).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_placeholder_view() {
        let response = handle_plan_placeholder().await;
        assert_eq!(response.0.status, "no_plan");
        assert!(response.0.sections.is_none());
    }
}
