use axum::extract::State;
use axum::response::Html;

use crate::presentation::state::AppState;

pub async fn status_page_handler(State(state): State<AppState>) -> Html<String> {
    let model_status = if state.assistant.model_available() {
        "Available"
    } else {
        "Unavailable - Check API Key"
    };

    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Test Page</title>
    <style>
        body {{ font-family: Arial, sans-serif; padding: 20px; }}
        .success {{ color: green; }}
    </style>
</head>
<body>
    <h1>AI Legal Assistant - Test Page</h1>
    <p class="success">&#10003; Server is running</p>
    <p>Model status: <strong>{model_status}</strong></p>
    <a href="/">Go to Main Application</a>
</body>
</html>
"#
    ))
}
