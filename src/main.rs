//! Starter web service entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use fastapi_starter::api::{create_router, AppState};
use fastapi_starter::config::Settings;
use fastapi_starter::lifecycle::Lifecycle;
use fastapi_starter::utils::shutdown_signal;
use fastapi_starter::{logging, metrics};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Settings come first: the logging level depends on them.
    let settings = Settings::load()?;

    logging::init(&settings);
    metrics::init_metrics();

    info!(
        "Configuration loaded (app={}, env={})",
        settings.app_name, settings.env
    );

    run(Arc::new(settings)).await
}

/// Run the service: startup, serve until a shutdown signal, then shutdown.
async fn run(settings: Arc<Settings>) -> anyhow::Result<()> {
    let mut lifecycle = Lifecycle::new(settings.clone());
    lifecycle.start().await?;

    // Once the running phase was entered, shutdown runs on every exit path
    // out of it, normal or failed.
    let result = serve(settings).await;
    lifecycle.stop().await;
    result
}

/// Bind the listener and serve requests until a shutdown signal arrives.
async fn serve(settings: Arc<Settings>) -> anyhow::Result<()> {
    let router = create_router(AppState::new(settings.clone()));

    let addr: SocketAddr = settings.bind_addr().parse()?;
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
