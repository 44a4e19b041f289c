//! Server startup, background session sweeping, and shutdown.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use registrar_core::errors::RegistrarResult;
use registrar_core::RegistrarConfig;
use registrar_observability::events;
use registrar_session::{cleanup_expired_sessions, SessionManager};
use registrar_storage::StorageEngine;

use crate::routes::build_router;
use crate::state::AppState;

/// Open (and migrate) the configured database.
pub fn open_storage(config: &RegistrarConfig) -> RegistrarResult<Arc<StorageEngine>> {
    StorageEngine::open_with_config(&config.storage).map(Arc::new)
}

/// Periodically drop sessions past their max age or idle timeout.
pub fn spawn_session_sweeper(sessions: SessionManager, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let removed = cleanup_expired_sessions(&sessions);
            if removed > 0 {
                events::sessions_expired(removed);
            }
        }
    })
}

/// Bind the configured address and serve until ctrl-c.
pub async fn serve(config: RegistrarConfig, storage: Arc<StorageEngine>) -> std::io::Result<()> {
    let addr = config.server.listen_addr();
    let sweep_every = Duration::from_secs(config.session.cleanup_interval_secs.max(1));
    let state = AppState::new(config, storage);

    let sweeper = spawn_session_sweeper(state.sessions.clone(), sweep_every);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "registrar listening");

    let result = axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await;
    sweeper.abort();
    tracing::info!("registrar stopped");
    result
}

async fn shutdown_signal() {
    wait_for_signal(tokio::signal::ctrl_c()).await;
}

/// Resolve when `signal` fires. If the handler cannot be installed the
/// server keeps running and never resolves.
async fn wait_for_signal<F, E>(signal: F)
where
    F: Future<Output = Result<(), E>>,
    E: std::fmt::Display,
{
    if let Err(e) = signal.await {
        tracing::error!(error = %e, "failed to install ctrl-c handler; graceful shutdown disabled");
        std::future::pending::<()>().await;
    }
}
