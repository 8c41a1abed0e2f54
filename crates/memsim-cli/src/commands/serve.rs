use memsim_core::config::ServerConfig;
use tracing::{info, warn};

/// Run the HTTP API until Ctrl-C.
pub async fn serve(config: &ServerConfig) -> anyhow::Result<()> {
    let router = memsim_api::build_router(config);
    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    let addr = listener.local_addr()?;

    info!(%addr, cors = ?config.cors_origins, "API server starting");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("shutdown signal received"),
                Err(e) => {
                    warn!(error = %e, "failed to install Ctrl-C handler");
                    std::future::pending::<()>().await;
                }
            }
        })
        .await?;

    info!("memsim server stopped");
    Ok(())
}
