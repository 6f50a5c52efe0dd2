//! Plan generation — orchestrates one submission end to end.
//!
//! Flow: build prompt → provider call → sectionize response → project savings.
//!
//! The projection never depends on the provider: it is computed from the
//! validated request alone, so identical inputs chart identically no matter
//! how the response text parses. A provider failure yields
//! `PlanState::Failed` and nothing else; a response the sectionizer cannot
//! carve up is degradation, not an error.

use tracing::{info, warn};

use crate::llm_client::TextGenerator;
use crate::plan::models::{PlanRequest, PlanState};
use crate::plan::projection::project_savings;
use crate::plan::prompts::build_plan_prompt;
use crate::plan::sectionizer::split_sections;

/// Runs the plan pipeline for one validated submission.
pub async fn run_plan_pipeline(provider: &dyn TextGenerator, request: &PlanRequest) -> PlanState {
    let prompt = build_plan_prompt(request);
    info!(
        "Generating plan: goal={}, horizon={} years",
        request.goal.label(),
        request.years
    );

    let response_text = match provider.generate(&prompt).await {
        Ok(text) => text,
        Err(e) => {
            warn!("Provider call failed: {e}");
            return PlanState::Failed {
                message: e.to_string(),
            };
        }
    };

    let sections = split_sections(&response_text);
    let projection = project_savings(request.monthly_contribution, request.years);

    info!(
        "Plan ready: {} projection points, final value {:.2}",
        projection.series.len(),
        projection.final_value
    );

    PlanState::Ready {
        sections,
        projection,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;

    use crate::llm_client::LlmError;
    use crate::plan::models::Goal;
    use crate::plan::sectionizer::NOT_PROVIDED;

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
            Err(LlmError::Api {
                status: 429,
                message: "quota exceeded".to_string(),
            })
        }
    }

    fn make_request() -> PlanRequest {
        PlanRequest {
            goal: Goal::House,
            age: 30,
            target_amount: 50_000.0,
            years: 10,
            monthly_contribution: 500.0,
        }
    }

    #[tokio::test]
    async fn test_pipeline_ready_on_success() {
        let provider = ScriptedProvider {
            text: "1. Save 500 monthly. 2. Index funds. 3. Savings: 30%. 4. Fits. 5. Gold.",
        };
        let state = run_plan_pipeline(&provider, &make_request()).await;
        match state {
            PlanState::Ready {
                sections,
                projection,
            } => {
                assert_eq!(sections.savings_plan, "Save 500 monthly.");
                assert_eq!(projection.series.len(), 10);
            }
            other => panic!("Expected Ready, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_pipeline_failed_carries_provider_message() {
        let state = run_plan_pipeline(&FailingProvider, &make_request()).await;
        match state {
            PlanState::Failed { message } => {
                assert!(message.contains("quota exceeded"), "Message was {message}");
                assert!(message.contains("429"));
            }
            other => panic!("Expected Failed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_off_script_response_still_ready() {
        let provider = ScriptedProvider {
            text: "I am sorry, I cannot help with that.",
        };
        let state = run_plan_pipeline(&provider, &make_request()).await;
        match state {
            PlanState::Ready {
                sections,
                projection,
            } => {
                assert_eq!(sections.savings_plan, NOT_PROVIDED);
                assert_eq!(sections.alternatives, NOT_PROVIDED);
                assert_eq!(projection.series.len(), 10);
            }
            other => panic!("Expected Ready, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_projection_independent_of_response_text() {
        let request = make_request();
        let terse = ScriptedProvider { text: "1. A 2. B 3. C 4. D 5. E" };
        let rambling = ScriptedProvider {
            text: "Here are some thoughts with no structure whatsoever.",
        };

        let first = run_plan_pipeline(&terse, &request).await;
        let second = run_plan_pipeline(&rambling, &request).await;

        let (first_proj, second_proj) = match (first, second) {
            (
                PlanState::Ready {
                    projection: first_proj,
                    ..
                },
                PlanState::Ready {
                    projection: second_proj,
                    ..
                },
            ) => (first_proj, second_proj),
            other => panic!("Expected two Ready states, got {other:?}"),
        };
        assert_eq!(first_proj, second_proj);
    }
}
