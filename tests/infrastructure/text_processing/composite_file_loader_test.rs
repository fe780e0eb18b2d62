use std::sync::Arc;

use legal_assistant::application::ports::{FileLoader, FileLoaderError};
use legal_assistant::domain::{ContentType, Document};
use legal_assistant::infrastructure::text_processing::{CompositeFileLoader, PlainTextAdapter};

use crate::support::{docx_bytes, paragraph};

#[tokio::test]
async fn given_default_adapters_when_loading_docx_then_delegates_to_docx_adapter() {
    let loader = CompositeFileLoader::with_default_adapters();
    let data = docx_bytes(&paragraph("Lease of premises"));
    let document = Document::new("lease.docx".to_string(), ContentType::Docx, data.len() as u64);

    let text = loader.extract_text(&data, &document).await.unwrap();

    assert_eq!(text, "Lease of premises\n");
}

#[tokio::test]
async fn given_text_document_when_loading_then_delegates_to_text_adapter() {
    let text_adapter: Arc<dyn FileLoader> = Arc::new(PlainTextAdapter);
    let loader = CompositeFileLoader::new(vec![(ContentType::Text, text_adapter)]);
    let text_bytes = b"Hello plain text";
    let document = Document::new(
        "readme.txt".to_string(),
        ContentType::Text,
        text_bytes.len() as u64,
    );

    let result = loader.extract_text(text_bytes, &document).await;

    assert_eq!(result.unwrap(), "Hello plain text");
}

#[tokio::test]
async fn given_unregistered_content_type_when_loading_then_returns_unsupported() {
    let text_adapter: Arc<dyn FileLoader> = Arc::new(PlainTextAdapter);
    let loader = CompositeFileLoader::new(vec![(ContentType::Text, text_adapter)]);
    let data = b"%PDF-1.7";
    let document = Document::new("scan.pdf".to_string(), ContentType::Pdf, data.len() as u64);

    let result = loader.extract_text(data, &document).await;

    assert!(matches!(
        result,
        Err(FileLoaderError::UnsupportedContentType(_))
    ));
}
