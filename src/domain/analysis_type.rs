use std::fmt;

/// Legal analysis modes offered by `/analyze`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnalysisType {
    ContractReview,
    #[default]
    DocumentSummary,
    ComplianceCheck,
    LegalAdvice,
}

impl AnalysisType {
    pub const ALL: [AnalysisType; 4] = [
        AnalysisType::ContractReview,
        AnalysisType::DocumentSummary,
        AnalysisType::ComplianceCheck,
        AnalysisType::LegalAdvice,
    ];

    /// Resolves a form value. Unrecognised keys fall back to `DocumentSummary`.
    pub fn from_key(key: &str) -> Self {
        match key {
            "contract_review" => Self::ContractReview,
            "document_summary" => Self::DocumentSummary,
            "compliance_check" => Self::ComplianceCheck,
            "legal_advice" => Self::LegalAdvice,
            _ => Self::default(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ContractReview => "contract_review",
            Self::DocumentSummary => "document_summary",
            Self::ComplianceCheck => "compliance_check",
            Self::LegalAdvice => "legal_advice",
        }
    }
}

impl fmt::Display for AnalysisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
