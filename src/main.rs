use product_catalog::config::ServiceConfig;
use product_catalog::http::{build_router, AppState};
use product_catalog::lifecycle::{setup_tracing, CatalogSystem};
use tokio::net::TcpListener;
use tracing::info;

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = sigterm.recv() => {},
                    _ = tokio::signal::ctrl_c() => {},
                }
            }
            Err(_) => {
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = ServiceConfig::from_env().map_err(|e| e.to_string())?;
    info!(?config, "Starting product catalog");

    let system = CatalogSystem::start(&config).map_err(|e| e.to_string())?;
    let app = build_router(AppState::new(system.product_client.clone()));

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .map_err(|e| format!("bind {} failed: {e}", config.bind_addr))?;
    info!("product catalog listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await
        .map_err(|e| format!("server failed: {e}"))?;

    // The router and its client clone are gone once serve returns.
    system.shutdown().await
}
