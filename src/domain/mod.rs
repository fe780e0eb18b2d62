mod analysis_type;
mod doc_type;
mod document;
pub mod text_limit;

pub use analysis_type::AnalysisType;
pub use doc_type::DocType;
pub use document::{ContentType, Document};
