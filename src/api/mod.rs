use anyhow::Result;
use axum::Router;
use tokio::sync::Notify;
use tower_http::trace::TraceLayer;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::db::StudentStore;

pub mod handlers;
pub mod response;
pub mod router;
pub mod validators;

/// How long in-flight requests may run after a shutdown signal.
pub const SHUTDOWN_GRACE_PERIOD: Duration = Duration::from_secs(5);

pub struct AppState {
    pub store: Arc<dyn StudentStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn StudentStore>) -> Arc<Self> {
        Arc::new(Self { store })
    }
}

pub fn build_app(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(router::routes(state))
        .layer(TraceLayer::new_for_http())
}

/// Serves until `shutdown` resolves, then stops accepting connections and
/// gives in-flight requests [`SHUTDOWN_GRACE_PERIOD`] to finish.
pub async fn serve<F>(cfg: &Config, store: Arc<dyn StudentStore>, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_app(AppState::new(store));

    let listener = tokio::net::TcpListener::bind(&cfg.http_server.addr).await?;
    tracing::info!("server started on http://{}", listener.local_addr()?);

    let drain = Arc::new(Notify::new());
    let drain_rx = drain.clone();

    let server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move { drain_rx.notified().await })
            .await
    });

    shutdown.await;
    tracing::info!("shutting down the server");
    drain.notify_one();

    match tokio::time::timeout(SHUTDOWN_GRACE_PERIOD, server).await {
        Ok(joined) => {
            joined??;
            tracing::info!("server shutdown successfully");
        }
        Err(_) => {
            tracing::warn!(
                "in-flight requests did not finish within {:?}, forcing shutdown",
                SHUTDOWN_GRACE_PERIOD
            );
        }
    }

    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to listen for SIGTERM: {}", e);
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
}
