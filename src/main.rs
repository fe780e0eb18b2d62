use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use legal_assistant::application::services::{DocumentExtractionService, LegalAssistantService};
use legal_assistant::infrastructure::llm::LlmClientFactory;
use legal_assistant::infrastructure::observability::{TracingConfig, init_tracing};
use legal_assistant::infrastructure::text_processing::CompositeFileLoader;
use legal_assistant::presentation::{AppState, Environment, ScaffoldConfig, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("failed to load settings")?;

    init_tracing(&TracingConfig::from_settings(
        environment.as_str(),
        &settings.logging,
    ));

    tracing::info!(
        port = settings.server.port,
        environment = %environment,
        json_format = settings.logging.enable_json,
        "Starting AI Legal Assistant"
    );

    let scaffold_config = ScaffoldConfig::from_env();
    let llm_client = match LlmClientFactory::create(&settings.llm, &scaffold_config) {
        Ok(client) => Some(client),
        Err(e) => {
            tracing::warn!(error = %e, "Language model unavailable, starting in degraded mode");
            None
        }
    };

    let assistant = Arc::new(LegalAssistantService::new(llm_client));
    tracing::info!(
        api_key_set = settings.llm.api_key.is_some(),
        model_available = assistant.model_available(),
        "Model status"
    );

    let extraction = Arc::new(DocumentExtractionService::new(Arc::new(
        CompositeFileLoader::with_default_adapters(),
    )));

    let state = AppState {
        assistant,
        extraction,
        upload_limit_bytes: settings.server.max_upload_bytes(),
        static_dir: PathBuf::from(&settings.server.static_dir),
    };

    let router = create_router(state);

    let listener = TcpListener::bind((settings.server.host.as_str(), settings.server.port))
        .await
        .with_context(|| {
            format!(
                "failed to bind {}:{}",
                settings.server.host, settings.server.port
            )
        })?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
