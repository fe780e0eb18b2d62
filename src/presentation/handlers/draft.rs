use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::domain::DocType;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::{error_response, result_timestamp};

#[derive(Serialize)]
pub struct DraftResponse {
    pub success: bool,
    pub result: String,
    pub doc_type: String,
    pub timestamp: String,
}

#[derive(Default)]
struct DraftForm {
    doc_type: Option<String>,
    requirements: String,
}

async fn read_form(multipart: &mut Multipart) -> Result<DraftForm, MultipartError> {
    let mut form = DraftForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "doc_type" => form.doc_type = Some(field.text().await?),
            "requirements" => form.requirements = field.text().await?,
            _ => {}
        }
    }

    Ok(form)
}

#[tracing::instrument(skip(state, multipart))]
pub async fn draft_handler(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let form = match read_form(&mut multipart).await {
        Ok(form) => form,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read multipart");
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("Document drafting failed: {e}"),
            );
        }
    };

    let doc_type = form
        .doc_type
        .unwrap_or_else(|| DocType::default().as_str().to_string());

    tracing::info!(
        doc_type = %doc_type,
        requirements_len = form.requirements.chars().count(),
        "Drafting requested"
    );

    if form.requirements.trim().is_empty() {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Please provide requirements for the document.",
        );
    }

    tracing::debug!(preview = %sanitize_prompt(&form.requirements), "Starting drafting");

    let result = state
        .assistant
        .draft(DocType::from_key(&doc_type), &form.requirements)
        .await;

    tracing::info!("Document drafting completed");

    (
        StatusCode::OK,
        Json(DraftResponse {
            success: true,
            result,
            doc_type,
            timestamp: result_timestamp(),
        }),
    )
        .into_response()
}
