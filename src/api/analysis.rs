//! REST API endpoints for document analysis

use actix_web::{HttpResponse, post, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::error::ApiError;
use crate::model::{Limits, RiskSection};
use crate::service::{DocumentAnalysisService, RiskAssessmentService};

/// Request body for risk assessment
#[derive(Debug, Deserialize, ToSchema)]
pub struct RiskAssessmentRequest {
    /// Full text of the contract to assess
    pub document_text: String,
}

/// Structured risk assessment response
#[derive(Debug, Serialize, ToSchema)]
pub struct RiskAssessmentResponse {
    /// Free text not attributable to any classified section
    pub summary: Option<String>,
    /// Findings ordered high before medium before low
    pub sections: Vec<RiskSection>,
    /// Model that produced the assessment
    pub model: String,
    pub assessed_at: DateTime<Utc>,
}

/// Request body for free-form document analysis
#[derive(Debug, Deserialize, ToSchema)]
pub struct DocumentAnalysisRequest {
    /// Instruction to apply to the document
    pub instruction: String,
    /// Full text of the document to analyze
    pub document_text: String,
}

/// Free-form document analysis response
#[derive(Debug, Serialize, ToSchema)]
pub struct DocumentAnalysisResponse {
    pub analysis: String,
    /// Model that produced the analysis
    pub model: String,
}

/// Assess the risks in a contract document
#[utoipa::path(
    post,
    path = "/v1/analysis/risk",
    request_body = RiskAssessmentRequest,
    responses(
        (status = 200, description = "Risk assessment completed", body = RiskAssessmentResponse),
        (status = 400, description = "Empty or oversized document"),
        (status = 502, description = "Generation service failed")
    ),
    tag = "analysis"
)]
#[post("/v1/analysis/risk")]
pub async fn assess_risk(
    service: web::Data<RiskAssessmentService>,
    limits: web::Data<Limits>,
    body: web::Json<RiskAssessmentRequest>,
) -> Result<HttpResponse, ApiError> {
    validate_document(&body.document_text, &limits)?;

    let report = service.assess(&body.document_text).await?;

    Ok(HttpResponse::Ok().json(RiskAssessmentResponse {
        summary: report.summary,
        sections: report.sections,
        model: service.model().to_string(),
        assessed_at: Utc::now(),
    }))
}

/// Apply a free-form instruction to a contract document
#[utoipa::path(
    post,
    path = "/v1/analysis/document",
    request_body = DocumentAnalysisRequest,
    responses(
        (status = 200, description = "Analysis completed", body = DocumentAnalysisResponse),
        (status = 400, description = "Empty instruction or invalid document"),
        (status = 502, description = "Generation service failed")
    ),
    tag = "analysis"
)]
#[post("/v1/analysis/document")]
pub async fn analyze_document(
    service: web::Data<DocumentAnalysisService>,
    limits: web::Data<Limits>,
    body: web::Json<DocumentAnalysisRequest>,
) -> Result<HttpResponse, ApiError> {
    if body.instruction.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "instruction must not be empty".to_string(),
        ));
    }
    validate_document(&body.document_text, &limits)?;

    let analysis = service
        .analyze(&body.instruction, &body.document_text)
        .await?;

    Ok(HttpResponse::Ok().json(DocumentAnalysisResponse {
        analysis,
        model: service.model().to_string(),
    }))
}

/// Validate a document body against the configured limits
fn validate_document(document_text: &str, limits: &Limits) -> Result<(), ApiError> {
    if document_text.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "document_text must not be empty".to_string(),
        ));
    }
    if document_text.chars().count() > limits.max_document_chars {
        return Err(ApiError::BadRequest(format!(
            "document_text exceeds the maximum of {} characters",
            limits.max_document_chars
        )));
    }
    Ok(())
}

/// Configure analysis routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(assess_risk).service(analyze_document);
}
