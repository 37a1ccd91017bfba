//! Error types for risk assessment

use thiserror::Error;

/// Error type for risk assessment
#[derive(Debug, Error)]
pub enum AssessmentError {
    #[error("LLM assessment failed: {0}")]
    AssessmentFailed(String),
}
