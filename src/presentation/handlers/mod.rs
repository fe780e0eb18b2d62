mod analyze;
mod download;
mod draft;
mod health;
mod status_page;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

pub use analyze::{AnalyzeResponse, analyze_handler};
pub use download::{DownloadRequest, download_draft_handler, download_filename};
pub use draft::{DraftResponse, draft_handler};
pub use health::{HealthResponse, health_handler};
pub use status_page::status_page_handler;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub(crate) fn error_response(status: StatusCode, error: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
        .into_response()
}

pub(crate) fn result_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
