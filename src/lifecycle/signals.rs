//! OS signal handling.
//!
//! SIGINT and SIGTERM (Ctrl+C only on non-unix) resolve the shutdown future,
//! as does the in-process [`Shutdown`](super::Shutdown) broadcast.

use tokio::sync::broadcast;

/// Resolves on the first of: Ctrl+C, SIGTERM, or the internal trigger.
pub async fn shutdown_signal(mut internal: broadcast::Receiver<()>) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    // A dropped trigger means nobody can request shutdown anymore, not that
    // shutdown was requested.
    let requested = async {
        if internal.recv().await.is_err() {
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
        () = requested => tracing::info!("Shutdown requested"),
    }
}
