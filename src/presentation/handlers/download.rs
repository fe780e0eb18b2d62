use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use super::error_response;

#[derive(Deserialize)]
pub struct DownloadRequest {
    #[serde(default)]
    pub content: Option<String>,
}

pub fn download_filename(now: chrono::DateTime<chrono::Local>) -> String {
    format!("legal_document_{}.txt", now.format("%Y%m%d_%H%M%S"))
}

/// Returns the posted draft as a plain-text attachment.
#[tracing::instrument(skip(payload))]
pub async fn download_draft_handler(
    payload: Result<Json<DownloadRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Invalid download request");
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("Download failed: {}", rejection.body_text()),
            );
        }
    };

    let Some(content) = request.content.filter(|c| !c.is_empty()) else {
        return error_response(StatusCode::BAD_REQUEST, "No content provided for download.");
    };

    let filename = download_filename(chrono::Local::now());
    tracing::info!(filename = %filename, bytes = content.len(), "Serving draft download");

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        content.into_bytes(),
    )
        .into_response()
}
