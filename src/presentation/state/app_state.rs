use std::path::PathBuf;
use std::sync::Arc;

use crate::application::services::{DocumentExtractionService, LegalAssistantService};

#[derive(Clone)]
pub struct AppState {
    pub assistant: Arc<LegalAssistantService>,
    pub extraction: Arc<DocumentExtractionService>,
    pub upload_limit_bytes: usize,
    /// Directory holding `index.html` and the browser scripts.
    pub static_dir: PathBuf,
}
