use legal_assistant::infrastructure::observability::REQUEST_ID_HEADER;

#[test]
fn given_request_id_header_constant_when_accessed_then_returns_correct_value() {
    assert_eq!(REQUEST_ID_HEADER, "x-request-id");
}
