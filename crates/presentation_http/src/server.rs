//! Server lifecycle with a bounded graceful shutdown

use std::{
    future::{Future, IntoFuture},
    io,
    time::Duration,
};

use axum::Router;
use tokio::{net::TcpListener, sync::oneshot};
use tracing::{info, warn};

/// Serve `app` until `shutdown` resolves, then drain open connections
///
/// Connections still open `drain_timeout` after the shutdown signal are
/// dropped.
pub async fn serve_until<F>(
    listener: TcpListener,
    app: Router,
    shutdown: F,
    drain_timeout: Duration,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (signalled_tx, signalled_rx) = oneshot::channel::<()>();

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.await;
            info!(?drain_timeout, "Draining open connections");
            signalled_tx.send(()).ok();
        })
        .into_future();

    let deadline = async move {
        if signalled_rx.await.is_ok() {
            tokio::time::sleep(drain_timeout).await;
        } else {
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        result = server => result,
        () = deadline => {
            warn!(?drain_timeout, "Shutdown timeout reached, dropping open connections");
            Ok(())
        }
    }
}
