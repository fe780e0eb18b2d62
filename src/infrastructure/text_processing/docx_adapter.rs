use std::io::{Cursor, Read};

use async_trait::async_trait;
use quick_xml::Reader;
use quick_xml::events::Event;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

use super::join_lines;
use super::pdf_adapter::EXTRACTION_TIMEOUT;

const DOCUMENT_PART: &str = "word/document.xml";

/// Reads the body paragraphs of a Word (OOXML) document.
pub struct DocxAdapter;

impl DocxAdapter {
    fn read_document_part(data: &[u8]) -> Result<String, FileLoaderError> {
        let mut archive = zip::ZipArchive::new(Cursor::new(data)).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to open DOCX archive: {e}"))
        })?;

        let mut part = archive.by_name(DOCUMENT_PART).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("missing {DOCUMENT_PART}: {e}"))
        })?;

        let mut xml = String::new();
        part.read_to_string(&mut xml).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to read {DOCUMENT_PART}: {e}"))
        })?;

        Ok(xml)
    }

    /// Paragraph texts in document order. Paragraphs inside tables are skipped,
    /// matching a plain body-paragraph iterator. Text box content
    /// (`w:txbxContent`) is not part of the paragraph that anchors it.
    pub fn paragraphs(xml: &str) -> Result<Vec<String>, FileLoaderError> {
        let mut reader = Reader::from_str(xml);

        let mut paragraphs = Vec::new();
        let mut current: Option<String> = None;
        let mut table_depth = 0usize;
        let mut textbox_depth = 0usize;
        let mut in_run = false;
        let mut in_text = false;

        loop {
            let event = reader
                .read_event()
                .map_err(|e| FileLoaderError::ExtractionFailed(format!("malformed DOCX XML: {e}")))?;

            match event {
                Event::Start(e) => match e.name().as_ref() {
                    b"w:tbl" => table_depth += 1,
                    b"w:txbxContent" => textbox_depth += 1,
                    _ if textbox_depth > 0 => {}
                    b"w:p" if table_depth == 0 => current = Some(String::new()),
                    b"w:r" => in_run = true,
                    b"w:t" => in_text = true,
                    _ => {}
                },
                Event::Empty(e) if textbox_depth == 0 => {
                    if let (true, Some(paragraph)) = (in_run, current.as_mut()) {
                        match e.name().as_ref() {
                            b"w:tab" => paragraph.push('\t'),
                            b"w:br" | b"w:cr" => paragraph.push('\n'),
                            _ => {}
                        }
                    }
                }
                Event::End(e) => match e.name().as_ref() {
                    b"w:tbl" => table_depth = table_depth.saturating_sub(1),
                    b"w:txbxContent" => textbox_depth = textbox_depth.saturating_sub(1),
                    _ if textbox_depth > 0 => {}
                    b"w:p" if table_depth == 0 => {
                        if let Some(paragraph) = current.take() {
                            paragraphs.push(paragraph);
                        }
                    }
                    b"w:r" => in_run = false,
                    b"w:t" => in_text = false,
                    _ => {}
                },
                Event::Text(text) if in_text && textbox_depth == 0 => {
                    if let Some(paragraph) = current.as_mut() {
                        let unescaped = text.unescape().map_err(|e| {
                            FileLoaderError::ExtractionFailed(format!("malformed DOCX text: {e}"))
                        })?;
                        paragraph.push_str(&unescaped);
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        Ok(paragraphs)
    }

    fn extract(data: &[u8]) -> Result<String, FileLoaderError> {
        let xml = Self::read_document_part(data)?;
        let paragraphs = Self::paragraphs(&xml)?;
        Ok(join_lines(paragraphs))
    }
}

#[async_trait]
impl FileLoader for DocxAdapter {
    #[tracing::instrument(skip(self, data), fields(filename = %document.filename, size_bytes = document.size_bytes))]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.content_type != ContentType::Docx {
            return Err(FileLoaderError::UnsupportedContentType(
                document.content_type.as_mime().to_string(),
            ));
        }

        let data_owned = data.to_vec();

        let text = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract(&data_owned)),
        )
        .await
        .map_err(|_| FileLoaderError::ExtractionFailed("DOCX extraction timed out".to_string()))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))??;

        tracing::info!(text_len = text.len(), "DOCX text extraction complete");

        Ok(text)
    }
}
