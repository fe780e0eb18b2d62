use legal_assistant::application::ports::{FileLoader, FileLoaderError};
use legal_assistant::domain::{ContentType, Document};
use legal_assistant::infrastructure::text_processing::DocxAdapter;

use crate::support::{docx_bytes, paragraph, zip_with_entry};

fn docx_document(data: &[u8]) -> Document {
    Document::new("agreement.docx".to_string(), ContentType::Docx, data.len() as u64)
}

#[tokio::test]
async fn given_body_paragraphs_when_extracting_then_returns_one_line_each() {
    let data = docx_bytes(&format!(
        "{}<w:p/>{}",
        paragraph("SERVICE AGREEMENT"),
        paragraph("Fees are due monthly.")
    ));

    let text = DocxAdapter
        .extract_text(&data, &docx_document(&data))
        .await
        .unwrap();

    assert_eq!(text, "SERVICE AGREEMENT\nFees are due monthly.\n");
}

#[tokio::test]
async fn given_table_paragraphs_when_extracting_then_skips_them() {
    let data = docx_bytes(&format!(
        "{}<w:tbl><w:tr><w:tc>{}</w:tc></w:tr></w:tbl>{}",
        paragraph("Before"),
        paragraph("Cell text"),
        paragraph("After")
    ));

    let text = DocxAdapter
        .extract_text(&data, &docx_document(&data))
        .await
        .unwrap();

    assert_eq!(text, "Before\nAfter\n");
}

#[test]
fn given_runs_with_tabs_and_breaks_when_reading_paragraphs_then_maps_to_whitespace() {
    let xml = r#"<w:document xmlns:w="w"><w:body><w:p><w:pPr><w:tabs><w:tab w:val="left"/></w:tabs></w:pPr><w:r><w:t>Name:</w:t><w:tab/><w:t xml:space="preserve">Acme </w:t><w:br/><w:t>&amp; Co</w:t></w:r></w:p></w:body></w:document>"#;

    let paragraphs = DocxAdapter::paragraphs(xml).unwrap();

    assert_eq!(paragraphs, vec!["Name:\tAcme \n& Co".to_string()]);
}

#[test]
fn given_split_runs_when_reading_paragraphs_then_concatenates_them() {
    let xml = r#"<w:document xmlns:w="w"><w:body><w:p><w:r><w:t>Gov</w:t></w:r><w:r><w:t>erning law</w:t></w:r></w:p></w:body></w:document>"#;

    let paragraphs = DocxAdapter::paragraphs(xml).unwrap();

    assert_eq!(paragraphs, vec!["Governing law".to_string()]);
}

#[test]
fn given_text_box_inside_paragraph_when_reading_paragraphs_then_keeps_outer_text_only() {
    let xml = r#"<w:document xmlns:w="w"><w:body><w:p><w:r><w:t xml:space="preserve">Before box </w:t></w:r><w:r><w:drawing><wp:anchor><a:graphic><a:graphicData><wps:wsp><wps:txbx><w:txbxContent><w:p><w:r><w:t>Box text</w:t><w:tab/></w:r></w:p></w:txbxContent></wps:txbx></wps:wsp></a:graphicData></a:graphic></wp:anchor></w:drawing></w:r><w:r><w:t>after box.</w:t></w:r></w:p><w:p><w:r><w:t>Next paragraph</w:t></w:r></w:p></w:body></w:document>"#;

    let paragraphs = DocxAdapter::paragraphs(xml).unwrap();

    assert_eq!(
        paragraphs,
        vec![
            "Before box after box.".to_string(),
            "Next paragraph".to_string()
        ]
    );
}

#[tokio::test]
async fn given_bytes_that_are_not_a_zip_when_extracting_then_returns_extraction_failed() {
    let data = b"definitely not a zip archive";

    let result = DocxAdapter.extract_text(data, &docx_document(data)).await;

    match result {
        Err(FileLoaderError::ExtractionFailed(message)) => {
            assert!(message.starts_with("failed to open DOCX archive"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn given_zip_without_document_part_when_extracting_then_returns_extraction_failed() {
    let data = zip_with_entry("word/styles.xml", "<w:styles/>");

    let result = DocxAdapter.extract_text(&data, &docx_document(&data)).await;

    match result {
        Err(FileLoaderError::ExtractionFailed(message)) => {
            assert!(message.starts_with("missing word/document.xml"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn given_non_docx_content_type_when_extracting_then_returns_unsupported() {
    let data = b"text";
    let document = Document::new("notes.txt".to_string(), ContentType::Text, 4);

    let result = DocxAdapter.extract_text(data, &document).await;

    assert!(matches!(
        result,
        Err(FileLoaderError::UnsupportedContentType(_))
    ));
}
