use inference_service::config::ServiceConfig;
use inference_service::observability::init_tracing;
use inference_service::startup::Application;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    init_tracing("inference-service", "info");

    let config = ServiceConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to start application: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    tracing::info!("inference-service listening on port {}", app.port());

    app.run_until_stopped().await
}
