//! Free-form document analysis service
//!
//! Applies a caller-supplied instruction ("summarize the termination terms",
//! "list the parties' obligations") to a contract document and returns the
//! model's plain-text answer.

use std::sync::Arc;

use thiserror::Error;

use crate::service::llm::TextGenerator;

/// Environment variable for the analysis model
const ENV_ANALYSIS_MODEL: &str = "ANALYSIS_MODEL";

/// Default model for document analysis
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// System prompt for document analysis
const ANALYSIS_SYSTEM_PROMPT: &str = r#"You are a legal assistant specializing in contract analysis.

Answer the user's question about the provided contract clearly, concisely,
and professionally. If the user asks about risks, clauses, or terms, provide
structured and practical guidance. Avoid disclaimers such as "I am an AI".
Stay professional and neutral."#;

/// Error type for document analysis
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("LLM analysis failed: {0}")]
    AnalysisFailed(String),
}

/// Service for answering free-form questions about a document
pub struct DocumentAnalysisService {
    generator: Arc<dyn TextGenerator>,
    model: String,
}

impl DocumentAnalysisService {
    /// Creates a new analysis service
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        let model = std::env::var(ENV_ANALYSIS_MODEL).unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        tracing::info!(
            model = %model,
            "Document analysis service initialized"
        );

        Self { generator, model }
    }

    /// Model name used for analysis calls
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Apply an instruction to a document and return the answer
    pub async fn analyze(
        &self,
        instruction: &str,
        document_text: &str,
    ) -> Result<String, AnalysisError> {
        let start_time = std::time::Instant::now();

        let prompt = build_analysis_prompt(instruction, document_text);

        tracing::debug!(
            model = %self.model,
            prompt_length = prompt.len(),
            "Initiating generation call for document analysis"
        );

        match self
            .generator
            .generate(&self.model, Some(ANALYSIS_SYSTEM_PROMPT), &prompt)
            .await
        {
            Ok(text) => {
                tracing::info!(
                    model = %self.model,
                    elapsed_ms = start_time.elapsed().as_millis(),
                    response_length = text.len(),
                    "Generation call for document analysis completed successfully"
                );
                Ok(text.trim().to_string())
            }
            Err(e) => {
                tracing::error!(
                    model = %self.model,
                    elapsed_ms = start_time.elapsed().as_millis(),
                    error = %e,
                    "Generation call for document analysis failed"
                );
                Err(AnalysisError::AnalysisFailed(e.to_string()))
            }
        }
    }
}

/// Build the analysis prompt from the instruction and document
fn build_analysis_prompt(instruction: &str, document_text: &str) -> String {
    format!(
        r#"{instruction}

## Document
{document_text}"#
    )
}
