//! Translation service using an LLM

use std::sync::Arc;

use thiserror::Error;

use crate::service::llm::TextGenerator;

/// Environment variable for the translation model
const ENV_TRANSLATION_MODEL: &str = "TRANSLATION_MODEL";

/// Default model for translation
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Error type for translation
#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("LLM translation failed: {0}")]
    TranslationFailed(String),
}

/// Service for translating text to a target language
pub struct TranslationService {
    generator: Arc<dyn TextGenerator>,
    model: String,
}

impl TranslationService {
    /// Creates a new translation service
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        let model =
            std::env::var(ENV_TRANSLATION_MODEL).unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        tracing::info!(
            model = %model,
            "Translation service initialized"
        );

        Self { generator, model }
    }

    /// Model name used for translation calls
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Translate text to the target language
    pub async fn translate(
        &self,
        text: &str,
        target_language: &str,
    ) -> Result<String, TranslationError> {
        let start_time = std::time::Instant::now();

        let prompt = build_translation_prompt(text, target_language);

        tracing::debug!(
            model = %self.model,
            target_language = %target_language,
            text_length = text.len(),
            "Initiating generation call for translation"
        );

        match self.generator.generate(&self.model, None, &prompt).await {
            Ok(translated) => {
                tracing::info!(
                    model = %self.model,
                    elapsed_ms = start_time.elapsed().as_millis(),
                    target_language = %target_language,
                    "Generation call for translation completed successfully"
                );
                Ok(translated.trim().to_string())
            }
            Err(e) => {
                tracing::error!(
                    model = %self.model,
                    elapsed_ms = start_time.elapsed().as_millis(),
                    target_language = %target_language,
                    error = %e,
                    "Generation call for translation failed"
                );
                Err(TranslationError::TranslationFailed(e.to_string()))
            }
        }
    }
}

/// Build the translation prompt
fn build_translation_prompt(text: &str, target_language: &str) -> String {
    format!(
        r#"Translate the following English text to {target_language}. Provide only the translated text, without any additional explanations, introductory phrases, or quotation marks.

Text to translate:
"{text}""#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::llm::GeneratorError;
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

    #[test]
    fn test_prompt_names_target_language() {
        let prompt = build_translation_prompt("Payment is due in thirty days.", "Spanish");
        assert!(prompt.contains("to Spanish"));
        assert!(prompt.contains("Payment is due in thirty days."));
    }

    #[tokio::test]
    async fn test_translate_trims_response() {
        let service =
            TranslationService::new(Arc::new(FixedGenerator("  Hola mundo  ".to_string())));

        let translated = service.translate("Hello world", "Spanish").await.unwrap();
        assert_eq!(translated, "Hola mundo");
    }
}
