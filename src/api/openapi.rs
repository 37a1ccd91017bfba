//! OpenAPI specification endpoints

use actix_web::{HttpResponse, Responder, get};
use utoipa::OpenApi;

/// OpenAPI documentation for the contract-intel API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Contract Intel API",
        description = "AI-assisted contract analysis, drafting, and translation"
    ),
    paths(
        crate::api::analysis::assess_risk,
        crate::api::analysis::analyze_document,
        crate::api::drafting::draft_contract,
        crate::api::translation::translate,
        crate::api::health::liveness,
        crate::api::health::readiness,
    ),
    components(schemas(
        crate::api::analysis::RiskAssessmentRequest,
        crate::api::analysis::RiskAssessmentResponse,
        crate::api::analysis::DocumentAnalysisRequest,
        crate::api::analysis::DocumentAnalysisResponse,
        crate::api::drafting::DraftContractRequest,
        crate::api::drafting::DraftContractResponse,
        crate::api::translation::TranslationRequest,
        crate::api::translation::TranslationResponse,
        crate::model::RiskLevel,
        crate::model::RiskSection,
    )),
    tags(
        (name = "analysis", description = "Risk assessment and document analysis"),
        (name = "drafting", description = "Contract drafting"),
        (name = "translation", description = "Translation"),
        (name = "health", description = "Health probes")
    )
)]
pub struct ApiDoc;

/// Serve OpenAPI JSON specification
#[get("/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

/// Serve OpenAPI YAML specification
#[get("/openapi.yaml")]
pub async fn openapi_yaml() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/yaml")
        .body(ApiDoc::openapi().to_yaml().unwrap())
}

/// Configure OpenAPI routes
pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(openapi_json).service(openapi_yaml);
}
