//! Application state and service initialization
//!
//! This module centralizes service initialization and dependency injection,
//! making it easier to manage the application lifecycle and test services.

use std::sync::Arc;

use crate::service::{
    ContractDraftingService, DocumentAnalysisService, GeminiClient, RiskAssessmentService,
    TextGenerator, TranslationService,
};

const ENV_GEMINI_API_KEY: &str = "GEMINI_API_KEY";

/// Application state containing all services and shared resources
///
/// This struct centralizes service initialization and makes it easy to inject
/// dependencies into Actix-web handlers.
pub struct AppState {
    /// Contract risk assessment service
    pub assessment_service: RiskAssessmentService,
    /// Free-form document analysis service
    pub analysis_service: DocumentAnalysisService,
    /// Contract drafting service
    pub drafting_service: ContractDraftingService,
    /// Translation service
    pub translation_service: TranslationService,
}

impl AppState {
    /// Initialize all services and build application state
    ///
    /// This performs:
    /// 1. Generation client initialization (requires GEMINI_API_KEY)
    /// 2. Service construction over the shared generator
    pub fn new() -> Result<Self, AppError> {
        let api_key =
            std::env::var(ENV_GEMINI_API_KEY).map_err(|_| AppError::MissingConfig(ENV_GEMINI_API_KEY))?;

        let generator: Arc<dyn TextGenerator> = Arc::new(
            GeminiClient::new(&api_key).map_err(|_| AppError::InvalidConfig("Invalid generation client configuration"))?,
        );

        Ok(Self {
            assessment_service: RiskAssessmentService::new(Arc::clone(&generator)),
            analysis_service: DocumentAnalysisService::new(Arc::clone(&generator)),
            drafting_service: ContractDraftingService::new(Arc::clone(&generator)),
            translation_service: TranslationService::new(generator),
        })
    }
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AppError {
    /// Missing required configuration
    #[error("Missing required configuration: {0}")]
    MissingConfig(&'static str),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(&'static str),
}
