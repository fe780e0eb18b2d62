use std::sync::Arc;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

/// Turns uploaded bytes into plain text, choosing the parser by file extension.
pub struct DocumentExtractionService {
    file_loader: Arc<dyn FileLoader>,
}

impl DocumentExtractionService {
    pub fn new(file_loader: Arc<dyn FileLoader>) -> Self {
        Self { file_loader }
    }

    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    pub async fn extract(&self, filename: &str, data: &[u8]) -> Result<String, ExtractionError> {
        let content_type = ContentType::from_filename(filename)
            .ok_or_else(|| ExtractionError::UnsupportedFormat(filename.to_string()))?;

        let document = Document::new(filename.to_string(), content_type, data.len() as u64);

        let text = self
            .file_loader
            .extract_text(data, &document)
            .await
            .map_err(|e| match e {
                FileLoaderError::UnsupportedContentType(_) => {
                    ExtractionError::UnsupportedFormat(filename.to_string())
                }
                FileLoaderError::ExtractionFailed(message) => ExtractionError::ExtractionFailure {
                    format: content_type.label(),
                    message,
                },
            })?;

        tracing::info!(
            format = content_type.label(),
            text_len = text.chars().count(),
            "Text extracted"
        );

        Ok(text)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("Unsupported file format. Please upload PDF, DOCX, or TXT.")]
    UnsupportedFormat(String),
    #[error("Error extracting text from {format}: {message}")]
    ExtractionFailure {
        format: &'static str,
        message: String,
    },
}
