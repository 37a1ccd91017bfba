//! Contract drafting service using an LLM
//!
//! Turns a free-text request into a formal contract draft.

use std::sync::Arc;

use thiserror::Error;

use crate::service::drafting::prompts::{DRAFTING_SYSTEM_PROMPT, build_contract_prompt};
use crate::service::llm::TextGenerator;

/// Environment variable for the drafting model
const ENV_DRAFTING_MODEL: &str = "DRAFTING_MODEL";

/// Default model for contract drafting
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

pub mod prompts;

/// Error type for contract drafting
#[derive(Debug, Error)]
pub enum DraftingError {
    #[error("LLM drafting failed: {0}")]
    DraftingFailed(String),
}

/// Service for drafting contracts from user requests
pub struct ContractDraftingService {
    generator: Arc<dyn TextGenerator>,
    model: String,
}

impl ContractDraftingService {
    /// Creates a new drafting service
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        let model = std::env::var(ENV_DRAFTING_MODEL).unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        tracing::info!(
            model = %model,
            "Contract drafting service initialized"
        );

        Self { generator, model }
    }

    /// Model name used for drafting calls
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Draft a contract from a free-text request
    pub async fn draft(&self, request: &str) -> Result<String, DraftingError> {
        let start_time = std::time::Instant::now();

        let prompt = build_contract_prompt(request);

        tracing::debug!(
            model = %self.model,
            request_length = request.len(),
            "Initiating generation call for contract drafting"
        );

        match self
            .generator
            .generate(&self.model, Some(DRAFTING_SYSTEM_PROMPT), &prompt)
            .await
        {
            Ok(text) => {
                tracing::info!(
                    model = %self.model,
                    elapsed_ms = start_time.elapsed().as_millis(),
                    contract_length = text.len(),
                    "Generation call for contract drafting completed successfully"
                );
                Ok(text.trim().to_string())
            }
            Err(e) => {
                tracing::error!(
                    model = %self.model,
                    elapsed_ms = start_time.elapsed().as_millis(),
                    error = %e,
                    "Generation call for contract drafting failed"
                );
                Err(DraftingError::DraftingFailed(e.to_string()))
            }
        }
    }
}
