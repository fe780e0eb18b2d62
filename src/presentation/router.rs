use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    analyze_handler, download_draft_handler, draft_handler, health_handler, status_page_handler,
};
use crate::presentation::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let upload_limit = DefaultBodyLimit::max(state.upload_limit_bytes);
    let index_page = ServeFile::new(state.static_dir.join("index.html"));
    let static_files = ServeDir::new(&state.static_dir);

    Router::new()
        .route_service("/", index_page)
        .nest_service("/static", static_files)
        .route("/health", get(health_handler))
        .route("/test", get(status_page_handler))
        .route("/analyze", post(analyze_handler))
        .route("/draft", post(draft_handler))
        .route("/download_draft", post(download_draft_handler))
        .layer(upload_limit)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
