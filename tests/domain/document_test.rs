use legal_assistant::domain::{ContentType, Document};

#[test]
fn given_supported_extensions_when_detecting_then_returns_content_type() {
    assert_eq!(ContentType::from_filename("contract.pdf"), Some(ContentType::Pdf));
    assert_eq!(ContentType::from_filename("offer.docx"), Some(ContentType::Docx));
    assert_eq!(ContentType::from_filename("notes.txt"), Some(ContentType::Text));
}

#[test]
fn given_uppercase_extension_when_detecting_then_ignores_case() {
    assert_eq!(ContentType::from_filename("SCAN.PDF"), Some(ContentType::Pdf));
    assert_eq!(ContentType::from_filename("Offer.DocX"), Some(ContentType::Docx));
}

#[test]
fn given_unsupported_extension_when_detecting_then_returns_none() {
    assert_eq!(ContentType::from_filename("contract.doc"), None);
    assert_eq!(ContentType::from_filename("contract.rtf"), None);
    assert_eq!(ContentType::from_filename("pdf"), None);
}

#[test]
fn given_content_type_when_labelled_then_uses_format_name() {
    assert_eq!(ContentType::Pdf.label(), "PDF");
    assert_eq!(ContentType::Docx.label(), "DOCX");
    assert_eq!(ContentType::Text.label(), "TXT");
}

#[test]
fn given_document_fields_when_created_then_stores_them() {
    let document = Document::new("lease.docx".to_string(), ContentType::Docx, 2048);

    assert_eq!(document.filename, "lease.docx");
    assert_eq!(document.content_type, ContentType::Docx);
    assert_eq!(document.size_bytes, 2048);
}
