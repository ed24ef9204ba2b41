// src/bin/api_server.rs

use crm_server::infra::logging;
use crm_server::transport;
use crm_server::{AppConfig, EntityStore};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    logging::init(&config.log_level, config.log_format)?;

    // --- Entity Store Initialization ---
    // Created once here and owned by the router state for the life of the process.
    let store = if config.seed_sample_data {
        EntityStore::with_sample_data()
    } else {
        tracing::info!("CRM_SEED_SAMPLE_DATA=false, starting with an empty store");
        EntityStore::new()
    };
    let app_state = transport::http::AppState::new(store);

    // --- API Server Initialization ---
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()))
        .layer(cors);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "API server listening");
    tracing::info!("Swagger UI available at http://{}/swagger-ui", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Store contents are not persisted; they are dropped with the router.
    tracing::info!("Graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received (Ctrl+C)");
}
