use axum::Json;
use axum::body::Bytes;
use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::ExtractionError;
use crate::domain::AnalysisType;
use crate::domain::text_limit::{INPUT_TEXT_LIMIT, cap_input_text};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::{ErrorResponse, error_response, result_timestamp};

#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub result: String,
    pub analysis_type: String,
    pub timestamp: String,
}

struct UploadedFile {
    filename: String,
    data: Bytes,
}

#[derive(Default)]
struct AnalyzeForm {
    analysis_type: Option<String>,
    text: String,
    file: Option<UploadedFile>,
}

async fn read_form(multipart: &mut Multipart) -> Result<AnalyzeForm, MultipartError> {
    let mut form = AnalyzeForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "analysis_type" => form.analysis_type = Some(field.text().await?),
            "text" => form.text = field.text().await?,
            "file" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field.bytes().await?;
                if !filename.is_empty() {
                    form.file = Some(UploadedFile { filename, data });
                }
            }
            _ => {}
        }
    }

    Ok(form)
}

#[tracing::instrument(skip(state, multipart))]
pub async fn analyze_handler(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let form = match read_form(&mut multipart).await {
        Ok(form) => form,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read multipart");
            return error_response(StatusCode::BAD_REQUEST, format!("Analysis failed: {e}"));
        }
    };

    let analysis_type = form
        .analysis_type
        .unwrap_or_else(|| AnalysisType::default().as_str().to_string());
    let mut text = form.text;

    tracing::info!(
        analysis_type = %analysis_type,
        text_len = text.chars().count(),
        file = form.file.as_ref().map(|f| f.filename.as_str()).unwrap_or("None"),
        "Analysis requested"
    );

    if let Some(file) = form.file {
        match state.extraction.extract(&file.filename, &file.data).await {
            Ok(extracted) => text = extracted,
            Err(ExtractionError::UnsupportedFormat(filename)) => {
                tracing::warn!(filename = %filename, "Unsupported upload");
                return (
                    StatusCode::UNSUPPORTED_MEDIA_TYPE,
                    Json(ErrorResponse {
                        error: ExtractionError::UnsupportedFormat(filename).to_string(),
                    }),
                )
                    .into_response();
            }
            Err(e @ ExtractionError::ExtractionFailure { .. }) => {
                tracing::error!(error = %e, "Extraction failed, continuing with error text");
                text = e.to_string();
            }
        }
    }

    if text.trim().is_empty() {
        tracing::warn!("Analysis request with no text");
        return error_response(
            StatusCode::BAD_REQUEST,
            "No text provided for analysis. Please upload a file or paste text.",
        );
    }

    let original_length = text.chars().count();
    let text = cap_input_text(text);
    if original_length > INPUT_TEXT_LIMIT {
        tracing::info!(original_length, limit = INPUT_TEXT_LIMIT, "Input text truncated");
    }

    tracing::debug!(preview = %sanitize_prompt(&text), "Starting analysis");

    let result = state
        .assistant
        .analyze(&text, AnalysisType::from_key(&analysis_type))
        .await;

    tracing::info!("Analysis completed");

    (
        StatusCode::OK,
        Json(AnalyzeResponse {
            success: true,
            result,
            analysis_type,
            timestamp: result_timestamp(),
        }),
    )
        .into_response()
}
