//! Unified API error handling
//!
//! This module provides a consistent error response format across all API endpoints.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use uuid::Uuid;

/// Standard error response format
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error type/code
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Unique request ID for tracing
    pub request_id: String,
}

/// Unified API error type
///
/// All API endpoints return `Result<T, ApiError>` for consistent error handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ApiError {
    /// Bad request / validation error (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    #[allow(dead_code)] // Reserved for non-upstream failures
    Internal(String),

    /// Upstream generation service error (502)
    #[error("External service error: {0}")]
    ExternalService(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::ExternalService(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let error_type = match self {
            ApiError::BadRequest(_) => "bad_request",
            ApiError::Internal(_) => "internal_error",
            ApiError::ExternalService(_) => "external_service_error",
        };

        tracing::error!(
            error_type = error_type,
            status = status.as_u16(),
            message = %self,
            "API error"
        );

        HttpResponse::build(status).json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
            request_id: Uuid::new_v4().to_string(),
        })
    }
}

// ============================================================================
// From conversions for service errors
// ============================================================================

impl From<crate::service::assessment::AssessmentError> for ApiError {
    fn from(err: crate::service::assessment::AssessmentError) -> Self {
        match err {
            crate::service::assessment::AssessmentError::AssessmentFailed(msg) => {
                ApiError::ExternalService(format!("Assessment failed: {}", msg))
            }
        }
    }
}

impl From<crate::service::document::AnalysisError> for ApiError {
    fn from(err: crate::service::document::AnalysisError) -> Self {
        match err {
            crate::service::document::AnalysisError::AnalysisFailed(msg) => {
                ApiError::ExternalService(format!("Analysis failed: {}", msg))
            }
        }
    }
}

impl From<crate::service::drafting::DraftingError> for ApiError {
    fn from(err: crate::service::drafting::DraftingError) -> Self {
        match err {
            crate::service::drafting::DraftingError::DraftingFailed(msg) => {
                ApiError::ExternalService(format!("Drafting failed: {}", msg))
            }
        }
    }
}

impl From<crate::service::translation::TranslationError> for ApiError {
    fn from(err: crate::service::translation::TranslationError) -> Self {
        match err {
            crate::service::translation::TranslationError::TranslationFailed(msg) => {
                ApiError::ExternalService(format!("Translation failed: {}", msg))
            }
        }
    }
}
