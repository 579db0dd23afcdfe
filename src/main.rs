use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use studygen::application::services::GenerationService;
use studygen::infrastructure::llm::LlmClientFactory;
use studygen::infrastructure::observability::{TracingConfig, init_tracing};
use studygen::infrastructure::text_processing::CompositeFileLoader;
use studygen::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("failed to load settings")?;

    init_tracing(&TracingConfig {
        environment: environment.to_string(),
        level: settings.logging.level.clone(),
        json_format: settings.logging.enable_json,
    });

    let file_loader = Arc::new(CompositeFileLoader::with_default_adapters());
    let llm_client = LlmClientFactory::create(&settings.llm)?;

    let generation_service = Arc::new(GenerationService::new(file_loader, llm_client));

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let state = AppState {
        generation_service,
        settings,
    };

    let router = create_router(state);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Listening on {}", addr);

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
    tracing::info!("Shutdown signal received");
}
