use axum::Router;
use std::future::Future;
use tokio::net::TcpListener;
use tokio::signal;

use super::router::build_app;
use crate::config::toml_config::ServerConfig;
use crate::utils::error::Result;

/// Binds the configured address and serves until Ctrl-C or SIGTERM.
pub async fn run(config: ServerConfig) -> Result<()> {
    let app = build_app(&config)?;

    let listener = TcpListener::bind(config.bind_address()).await?;
    tracing::info!("🚀 Server listening on http://{}", listener.local_addr()?);

    serve(listener, app, shutdown_signal()).await?;

    tracing::info!("👋 Server stopped");
    Ok(())
}

pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("🔒 Shutdown signal received");
}
