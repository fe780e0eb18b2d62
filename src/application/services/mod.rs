mod document_extraction_service;
mod legal_assistant_service;
pub mod prompt_templates;

pub use document_extraction_service::{DocumentExtractionService, ExtractionError};
pub use legal_assistant_service::{AssistantError, LegalAssistantService};
