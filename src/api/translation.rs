//! REST API endpoint for translation

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::error::ApiError;
use crate::service::TranslationService;

/// Request body for translation
#[derive(Debug, Deserialize, ToSchema)]
pub struct TranslationRequest {
    /// Text to translate
    pub text: String,
    /// Target language name, e.g. "Spanish"
    pub target_language: String,
}

/// Translation response
#[derive(Debug, Serialize, ToSchema)]
pub struct TranslationResponse {
    pub translation: String,
    /// Model that produced the translation
    pub model: String,
}

/// Translate text to a target language
#[utoipa::path(
    post,
    path = "/v1/translation",
    request_body = TranslationRequest,
    responses(
        (status = 200, description = "Translation completed", body = TranslationResponse),
        (status = 400, description = "Empty text or target language"),
        (status = 502, description = "Generation service failed")
    ),
    tag = "translation"
)]
#[post("/v1/translation")]
pub async fn translate(
    service: web::Data<TranslationService>,
    body: web::Json<TranslationRequest>,
) -> Result<HttpResponse, ApiError> {
    if body.text.trim().is_empty() {
        return Err(ApiError::BadRequest("text must not be empty".to_string()));
    }
    if body.target_language.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "target_language must not be empty".to_string(),
        ));
    }

    let translation = service
        .translate(&body.text, &body.target_language)
        .await?;

    Ok(HttpResponse::Ok().json(TranslationResponse {
        translation,
        model: service.model().to_string(),
    }))
}

/// Configure translation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(translate);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::llm::{GeneratorError, TextGenerator};
    use actix_web::{App, test};
    use async_trait::async_trait;
    use std::sync::Arc;

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

    #[actix_web::test]
    async fn test_translate_returns_translation() {
        let service = web::Data::new(TranslationService::new(Arc::new(FixedGenerator(
            "Hola mundo".to_string(),
        ))));
        let app =
            test::init_service(App::new().app_data(service).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/v1/translation")
            .set_json(serde_json::json!({ "text": "Hello world", "target_language": "Spanish" }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["translation"], "Hola mundo");
    }

    #[actix_web::test]
    async fn test_translate_rejects_missing_language() {
        let service = web::Data::new(TranslationService::new(Arc::new(FixedGenerator(
            "unused".to_string(),
        ))));
        let app =
            test::init_service(App::new().app_data(service).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/v1/translation")
            .set_json(serde_json::json!({ "text": "Hello world", "target_language": " " }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }
}
