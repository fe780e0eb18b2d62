use std::fmt;

/// Document kinds that `/draft` can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DocType {
    Nda,
    EmploymentContract,
    LeaseAgreement,
    #[default]
    ServiceAgreement,
}

impl DocType {
    pub const ALL: [DocType; 4] = [
        DocType::Nda,
        DocType::EmploymentContract,
        DocType::LeaseAgreement,
        DocType::ServiceAgreement,
    ];

    /// Resolves a form value. Unrecognised keys fall back to `ServiceAgreement`.
    pub fn from_key(key: &str) -> Self {
        match key {
            "nda" => Self::Nda,
            "employment_contract" => Self::EmploymentContract,
            "lease_agreement" => Self::LeaseAgreement,
            "service_agreement" => Self::ServiceAgreement,
            _ => Self::default(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nda => "nda",
            Self::EmploymentContract => "employment_contract",
            Self::LeaseAgreement => "lease_agreement",
            Self::ServiceAgreement => "service_agreement",
        }
    }
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
