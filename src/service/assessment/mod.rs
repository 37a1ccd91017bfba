//! Contract risk assessment service using an LLM
//!
//! Sends the contract text to the generative model and extracts a structured
//! risk report from the free-text response.

use std::sync::Arc;

use crate::model::RiskReport;
use crate::service::assessment::extractor::extract_risk_report;
use crate::service::assessment::prompts::{ASSESSMENT_SYSTEM_PROMPT, build_assessment_prompt};
use crate::service::assessment::validation::validate_risk_report;
use crate::service::llm::TextGenerator;

/// Environment variable for the assessment model
const ENV_ASSESSMENT_MODEL: &str = "ASSESSMENT_MODEL";

/// Default model for risk assessment
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

pub mod error;
pub mod extractor;
pub mod prompts;
pub mod validation;

pub use error::AssessmentError;

/// Service for assessing contract risk
pub struct RiskAssessmentService {
    generator: Arc<dyn TextGenerator>,
    model: String,
}

impl RiskAssessmentService {
    /// Creates a new assessment service
    ///
    /// Uses the shared text generator passed from startup. Optionally uses
    /// the ASSESSMENT_MODEL env var (defaults to gemini-2.5-flash).
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        let model =
            std::env::var(ENV_ASSESSMENT_MODEL).unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        tracing::info!(
            model = %model,
            "Risk assessment service initialized"
        );

        Self { generator, model }
    }

    /// Model name used for assessment calls
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Assess the risks in a contract document
    pub async fn assess(&self, document_text: &str) -> Result<RiskReport, AssessmentError> {
        let start_time = std::time::Instant::now();

        let prompt = build_assessment_prompt(document_text);
        let prompt_length = prompt.len();

        tracing::debug!(
            model = %self.model,
            prompt_length = prompt_length,
            "Initiating generation call for risk assessment"
        );

        let raw = match self
            .generator
            .generate(&self.model, Some(ASSESSMENT_SYSTEM_PROMPT), &prompt)
            .await
        {
            Ok(text) => {
                let elapsed = start_time.elapsed();
                tracing::info!(
                    model = %self.model,
                    elapsed_ms = elapsed.as_millis(),
                    prompt_length = prompt_length,
                    response_length = text.len(),
                    "Generation call for risk assessment completed successfully"
                );
                text
            }
            Err(e) => {
                let elapsed = start_time.elapsed();
                tracing::error!(
                    model = %self.model,
                    elapsed_ms = elapsed.as_millis(),
                    prompt_length = prompt_length,
                    error = %e,
                    "Generation call for risk assessment failed"
                );
                return Err(AssessmentError::AssessmentFailed(e.to_string()));
            }
        };

        let report = extract_risk_report(&raw);

        let validation = validate_risk_report(&report);
        for warning in &validation.warnings {
            tracing::warn!(model = %self.model, warning = %warning, "Risk report quality warning");
        }

        tracing::debug!(
            sections = report.sections.len(),
            has_summary = report.summary.is_some(),
            "Extracted risk report from response"
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RiskLevel;
    use crate::service::llm::{GeneratorError, TextGenerator};
    use async_trait::async_trait;

    struct FixedGenerator(String);

    #[async_trait]
    impl TextGenerator for FixedGenerator {
        async fn generate(
            &self,
            _model: &str,
            _system: Option<&str>,
            _prompt: &str,
        ) -> Result<String, GeneratorError> {
            Ok(self.0.clone())
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        async fn generate(
            &self,
            _model: &str,
            _system: Option<&str>,
            _prompt: &str,
        ) -> Result<String, GeneratorError> {
            Err(GeneratorError::RateLimited)
        }
    }

    #[tokio::test]
    async fn test_assess_parses_structured_response() {
        let response = "High Risk: uncapped liability.\nLow Risk: standard venue clause.";
        let service = RiskAssessmentService::new(Arc::new(FixedGenerator(response.to_string())));

        let report = service.assess("contract text").await.unwrap();

        assert_eq!(report.summary, None);
        assert_eq!(report.sections.len(), 2);
        assert_eq!(report.sections[0].level, RiskLevel::High);
        assert_eq!(report.sections[1].level, RiskLevel::Low);
    }

    #[tokio::test]
    async fn test_assess_tolerates_unstructured_response() {
        let response = "The contract looks fine overall.";
        let service = RiskAssessmentService::new(Arc::new(FixedGenerator(response.to_string())));

        let report = service.assess("contract text").await.unwrap();

        assert_eq!(
            report.summary.as_deref(),
            Some("The contract looks fine overall.")
        );
        assert!(report.sections.is_empty());
    }

    #[tokio::test]
    async fn test_assess_surfaces_generator_failure() {
        let service = RiskAssessmentService::new(Arc::new(FailingGenerator));

        let err = service.assess("contract text").await.unwrap_err();
        assert!(matches!(err, AssessmentError::AssessmentFailed(_)));
    }
}
