//! Application startup and lifecycle management.

use crate::config::ServiceConfig;
use crate::error::AppError;
use crate::handlers;
use crate::services::endpoint::sagemaker::{self, SagemakerEndpoint};
use crate::services::endpoint::InferenceEndpoint;
use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

/// Shared application state.
///
/// The endpoint client is built once here and reused read-only across
/// invocations.
#[derive(Clone)]
pub struct AppState {
    pub config: ServiceConfig,
    pub endpoint: Arc<dyn InferenceEndpoint>,
}

/// Health check endpoint for liveness probes.
async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": "inference-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

/// Readiness check endpoint. The endpoint client holds no connection state,
/// so readiness reports process liveness only.
async fn readiness_check() -> StatusCode {
    StatusCode::OK
}

/// Build the service router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/generate", get(handlers::generate))
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: ServiceConfig) -> Result<Self, AppError> {
        let endpoint: Arc<dyn InferenceEndpoint> = Arc::new(SagemakerEndpoint::new());

        tracing::info!(
            endpoint = sagemaker::ENDPOINT_NAME,
            region = sagemaker::AWS_REGION,
            "Initialized SageMaker runtime client"
        );

        let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        let state = AppState { config, endpoint };

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until a shutdown signal arrives.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let app = router(self.state);

        axum::serve(self.listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}
