use chrono::{Local, TimeZone};
use legal_assistant::presentation::handlers::download_filename;

#[test]
fn given_timestamp_when_naming_download_then_uses_compact_date_and_time() {
    let timestamp = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();

    assert_eq!(
        download_filename(timestamp),
        "legal_document_20240309_140507.txt"
    );
}
