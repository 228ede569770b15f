use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::EnvFilter;

use users::{
    build_repository, cleanup::CleanupTask, config::ServerConfig, routes, state::AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting users service");

    let config = ServerConfig::from_env().context("failed to load configuration")?;
    let repository = build_repository(&config).await?;

    // Owned here so the cleanup task stops with the server
    let shutdown = CancellationToken::new();
    let cleanup = tokio::spawn(
        CleanupTask::new(config.cleanup_interval()).run(shutdown.child_token()),
    );

    let app = routes::create_router(AppState::new(repository));

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Users service listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown.clone()))
        .await?;

    shutdown.cancel();
    cleanup.await?;
    info!("Users service stopped");

    Ok(())
}

async fn shutdown_signal(token: CancellationToken) {
    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            if let Err(e) = result {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
                token.cancelled().await;
            }
            info!("Shutting down users service");
        }
        _ = token.cancelled() => {}
    }
    token.cancel();
}
