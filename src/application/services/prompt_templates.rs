use crate::domain::{AnalysisType, DocType};

const PLACEHOLDER: &str = "{input}";

/// System context placed ahead of every analysis and drafting prompt.
pub const LEGAL_CONTEXT: &str = "You are an AI Legal Assistant specializing in:
- Contract review and analysis
- Legal document drafting
- Case law research
- Legal advice and guidance
- Document summarization
- Compliance checking

Always provide accurate, clear, and professional legal information.
Note: This is for informational purposes only and not a substitute for professional legal advice.

Provide responses in well-structured format with clear headings and bullet points.";

/// A static prompt body with a single `{input}` slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptTemplate {
    body: &'static str,
}

impl PromptTemplate {
    const fn new(body: &'static str) -> Self {
        Self { body }
    }

    pub fn body(&self) -> &'static str {
        self.body
    }

    /// Interpolates `input` once. Placeholder-like text inside `input` is left as is.
    pub fn render(&self, input: &str) -> String {
        self.body.replacen(PLACEHOLDER, input, 1)
    }
}

/// Full prompt: the legal context, a blank line, then the rendered template.
pub fn assemble_prompt(template: PromptTemplate, input: &str) -> String {
    format!("{LEGAL_CONTEXT}\n\n{}", template.render(input))
}

pub fn analysis_template(analysis_type: AnalysisType) -> PromptTemplate {
    match analysis_type {
        AnalysisType::ContractReview => CONTRACT_REVIEW,
        AnalysisType::DocumentSummary => DOCUMENT_SUMMARY,
        AnalysisType::ComplianceCheck => COMPLIANCE_CHECK,
        AnalysisType::LegalAdvice => LEGAL_ADVICE,
    }
}

pub fn draft_template(doc_type: DocType) -> PromptTemplate {
    match doc_type {
        DocType::Nda => NDA,
        DocType::EmploymentContract => EMPLOYMENT_CONTRACT,
        DocType::LeaseAgreement => LEASE_AGREEMENT,
        DocType::ServiceAgreement => SERVICE_AGREEMENT,
    }
}

const CONTRACT_REVIEW: PromptTemplate = PromptTemplate::new(
    "ACT AS AN EXPERT LEGAL ANALYST. Review this contract and provide a comprehensive analysis with the following sections:

## CONTRACT REVIEW ANALYSIS

### 1. KEY TERMS AND CONDITIONS
- Identify and list all major terms
- Explain significant clauses
- Highlight financial terms and payment conditions

### 2. POTENTIAL RISKS AND RED FLAGS
- Unfavorable terms for either party
- Ambiguous language
- Missing standard clauses
- Potential legal conflicts

### 3. MISSING CLAUSES
- Essential clauses that should be included
- Industry-standard provisions
- Protective clauses for both parties

### 4. SUGGESTED IMPROVEMENTS
- Specific language recommendations
- Additional clauses to consider
- Negotiation points

### 5. OVERALL ASSESSMENT
- Risk level (Low/Medium/High)
- Recommendations for next steps
- Key focus areas for negotiation

Contract text to analyze:
{input}
",
);

const DOCUMENT_SUMMARY: PromptTemplate = PromptTemplate::new(
    "ACT AS A LEGAL PROFESSIONAL. Summarize this legal document with the following structure:

## LEGAL DOCUMENT SUMMARY

### 1. MAIN PURPOSE AND PARTIES
- Primary objective of the document
- Parties involved and their roles
- Effective dates and duration

### 2. KEY OBLIGATIONS AND RIGHTS
- Main responsibilities of each party
- Rights granted to each party
- Key deliverables and expectations

### 3. IMPORTANT DEADLINES AND DATES
- Critical timelines
- Milestone dates
- Termination and renewal dates

### 4. TERMINATION CONDITIONS
- Grounds for termination
- Notice requirements
- Post-termination obligations

### 5. KEY LEGAL PROVISIONS
- Governing law and jurisdiction
- Dispute resolution mechanisms
- Confidentiality and intellectual property

Document text:
{input}
",
);

const COMPLIANCE_CHECK: PromptTemplate = PromptTemplate::new(
    "ACT AS A COMPLIANCE OFFICER. Analyze this document for compliance issues:

## COMPLIANCE ANALYSIS REPORT

### 1. REGULATORY COMPLIANCE RISKS
- Potential regulatory violations
- Industry-specific compliance requirements
- Reporting and documentation obligations

### 2. DATA PROTECTION ISSUES
- GDPR/CCPA compliance assessment
- Data handling and storage concerns
- Privacy policy adequacy

### 3. CONTRACT LAW COMPLIANCE
- Contract formation validity
- Consideration and mutual assent
- Capacity and legality assessment

### 4. INDUSTRY-SPECIFIC REGULATIONS
- Relevant industry standards
- Licensing and certification requirements
- Professional standards compliance

### 5. RECOMMENDED COMPLIANCE MEASURES
- Immediate actions required
- Documentation improvements
- Monitoring and audit recommendations

Document text:
{input}
",
);

const LEGAL_ADVICE: PromptTemplate = PromptTemplate::new(
    "ACT AS A LEGAL ADVISOR. Provide general legal guidance on this situation:

## LEGAL GUIDANCE ANALYSIS

### 1. RELEVANT LAWS AND REGULATIONS
- Applicable statutes and regulations
- Legal principles involved
- Jurisdictional considerations

### 2. POTENTIAL LEGAL STRATEGIES
- Available legal approaches
- Pros and cons of each strategy
- Recommended course of action

### 3. RIGHTS AND OBLIGATIONS
- Legal rights of involved parties
- Corresponding obligations
- Potential liabilities

### 4. RISK ASSESSMENT
- Legal risks involved
- Probability of success
- Potential consequences

### 5. NEXT STEPS TO CONSIDER
- Immediate actions to take
- Documentation to gather
- When to consult a licensed attorney

Situation to analyze:
{input}
",
);

const NDA: PromptTemplate = PromptTemplate::new(
    "ACT AS A LEGAL DRAFTING EXPERT. Draft a comprehensive Non-Disclosure Agreement based on these requirements:

REQUIREMENTS PROVIDED:
{input}

DRAFT A COMPLETE NON-DISCLOSURE AGREEMENT INCLUDING:

1. PARTIES INFORMATION
- Full legal names and addresses
- Effective date
- Purpose of disclosure

2. DEFINITION OF CONFIDENTIAL INFORMATION
- Specific categories of protected information
- Exclusions from confidentiality
- Examples of confidential materials

3. OBLIGATIONS OF RECEIVING PARTY
- Duty to maintain confidentiality
- Permitted uses of information
- Security measures required
- Return/destruction of information

4. TERM AND TERMINATION
- Duration of confidentiality
- Termination conditions
- Survival of obligations

5. REMEDIES AND JURISDICTION
- Legal remedies for breach
- Injunctive relief provisions
- Governing law and jurisdiction
- Dispute resolution process

6. MISCELLANEOUS PROVISIONS
- Entire agreement clause
- Severability
- Notices
- Assignment restrictions

Provide the complete agreement in proper legal format with appropriate section headings.
",
);

const EMPLOYMENT_CONTRACT: PromptTemplate = PromptTemplate::new(
    "ACT AS AN EMPLOYMENT LAW SPECIALIST. Draft a comprehensive Employment Contract based on these requirements:

REQUIREMENTS PROVIDED:
{input}

DRAFT A COMPLETE EMPLOYMENT CONTRACT INCLUDING:

1. POSITION AND DUTIES
- Job title and description
- Reporting structure
- Primary responsibilities
- Work location requirements

2. COMPENSATION AND BENEFITS
- Salary and payment schedule
- Bonus structure if applicable
- Benefits package details
- Expense reimbursement

3. WORKING HOURS AND LOCATION
- Standard working hours
- Overtime policies
- Remote work provisions
- Travel requirements

4. CONFIDENTIALITY AND IP
- Confidentiality obligations
- Intellectual property assignment
- Non-compete provisions (if applicable)
- Non-solicitation clauses

5. TERMINATION CONDITIONS
- Notice periods
- Grounds for termination
- Severance provisions
- Return of company property

6. GENERAL PROVISIONS
- At-will employment statement (if applicable)
- Governing law
- Entire agreement clause
- Amendment procedures

Provide the complete contract in proper legal format.
",
);

const LEASE_AGREEMENT: PromptTemplate = PromptTemplate::new(
    "ACT AS A REAL ESTATE ATTORNEY. Draft a comprehensive Residential Lease Agreement based on these requirements:

REQUIREMENTS PROVIDED:
{input}

DRAFT A COMPLETE RESIDENTIAL LEASE AGREEMENT INCLUDING:

1. PROPERTY DESCRIPTION
- Complete address and unit details
- Included furnishings and appliances
- Common areas and exclusive use spaces

2. LEASE TERM AND RENT
- Lease commencement and end dates
- Monthly rent amount and due date
- Late payment penalties
- Security deposit details

3. MAINTENANCE RESPONSIBILITIES
- Tenant maintenance obligations
- Landlord repair responsibilities
- Emergency procedures
- Alteration restrictions

4. HOUSE RULES AND REGULATIONS
- Occupancy limits
- Pet policies (if any)
- Noise restrictions
- Smoking policies

5. DEFAULT AND TERMINATION
- Default conditions
- Eviction procedures
- Early termination options
- Renewal procedures

6. LEGAL PROVISIONS
- Governing state law
- Notice requirements
- Security deposit return procedures
- Dispute resolution

Provide the complete lease agreement in proper legal format.
",
);

const SERVICE_AGREEMENT: PromptTemplate = PromptTemplate::new(
    "ACT AS A CONTRACT LAW EXPERT. Draft a comprehensive Service Agreement based on these requirements:

REQUIREMENTS PROVIDED:
{input}

DRAFT A COMPLETE SERVICE AGREEMENT INCLUDING:

1. SERVICES TO BE PROVIDED
- Detailed description of services
- Performance standards
- Deliverables timeline
- Acceptance criteria

2. PAYMENT TERMS
- Fee structure and amounts
- Payment schedule
- Expense reimbursement
- Tax responsibilities

3. TIMELINE AND DELIVERABLES
- Project milestones
- Delivery dates
- Performance metrics
- Reporting requirements

4. INTELLECTUAL PROPERTY RIGHTS
- Pre-existing IP ownership
- New IP creation and ownership
- License grants
- IP protection obligations

5. LIABILITY AND INDEMNIFICATION
- Limitation of liability
- Indemnification provisions
- Insurance requirements
- Warranty disclaimers

6. TERM AND TERMINATION
- Agreement duration
- Termination for cause
- Termination for convenience
- Post-termination obligations

Provide the complete service agreement in proper legal format.
",
);
