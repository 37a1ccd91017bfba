//! REST API endpoint for contract drafting

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::error::ApiError;
use crate::service::ContractDraftingService;

/// Request body for contract drafting
#[derive(Debug, Deserialize, ToSchema)]
pub struct DraftContractRequest {
    /// Free-text description of the contract to draft
    pub request: String,
}

/// Drafted contract response
#[derive(Debug, Serialize, ToSchema)]
pub struct DraftContractResponse {
    pub contract: String,
    /// Model that produced the draft
    pub model: String,
}

/// Draft a contract from a free-text request
#[utoipa::path(
    post,
    path = "/v1/drafting/contract",
    request_body = DraftContractRequest,
    responses(
        (status = 200, description = "Contract drafted", body = DraftContractResponse),
        (status = 400, description = "Empty request"),
        (status = 502, description = "Generation service failed")
    ),
    tag = "drafting"
)]
#[post("/v1/drafting/contract")]
pub async fn draft_contract(
    service: web::Data<ContractDraftingService>,
    body: web::Json<DraftContractRequest>,
) -> Result<HttpResponse, ApiError> {
    if body.request.trim().is_empty() {
        return Err(ApiError::BadRequest("request must not be empty".to_string()));
    }

    let contract = service.draft(&body.request).await?;

    Ok(HttpResponse::Ok().json(DraftContractResponse {
        contract,
        model: service.model().to_string(),
    }))
}

/// Configure drafting routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(draft_contract);
}
