use legal_assistant::domain::AnalysisType;

#[test]
fn given_every_known_key_when_resolving_then_round_trips_through_as_str() {
    for analysis_type in AnalysisType::ALL {
        assert_eq!(AnalysisType::from_key(analysis_type.as_str()), analysis_type);
    }
}

#[test]
fn given_unknown_key_when_resolving_then_falls_back_to_document_summary() {
    assert_eq!(
        AnalysisType::from_key("patent_search"),
        AnalysisType::DocumentSummary
    );
    assert_eq!(AnalysisType::from_key(""), AnalysisType::DocumentSummary);
}

#[test]
fn given_key_with_different_case_when_resolving_then_is_not_matched() {
    assert_eq!(
        AnalysisType::from_key("Contract_Review"),
        AnalysisType::DocumentSummary
    );
}

#[test]
fn given_padded_key_when_resolving_then_is_not_matched() {
    assert_eq!(
        AnalysisType::from_key("  legal_advice "),
        AnalysisType::DocumentSummary
    );
}

#[test]
fn given_analysis_type_when_displayed_then_uses_form_key() {
    assert_eq!(AnalysisType::ComplianceCheck.to_string(), "compliance_check");
}
