pub mod assessment;
pub mod document;
pub mod drafting;
pub mod llm;
pub mod translation;

pub use assessment::RiskAssessmentService;
pub use document::DocumentAnalysisService;
pub use drafting::ContractDraftingService;
pub use llm::{GeminiClient, TextGenerator};
pub use translation::TranslationService;
