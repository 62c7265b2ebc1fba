//! Graceful shutdown signal handling

use std::io;

use salvo::server::ServerHandle;
use thiserror::Error;
use tokio::signal;
use tracing::info;

/// A shutdown signal handler could not be installed.
#[derive(Debug, Error)]
#[error("failed to install {signal} handler: {source}")]
pub(crate) struct ShutdownSignalError {
    signal: &'static str,
    #[source]
    source: io::Error,
}

/// Stop the server gracefully once an interrupt or terminate signal arrives.
pub(crate) async fn listen(handle: ServerHandle) -> Result<(), ShutdownSignalError> {
    let signal = wait_for_signal().await?;

    info!("{signal} received, stopping server");

    handle.stop_graceful(None);

    Ok(())
}

#[cfg(unix)]
async fn wait_for_signal() -> Result<&'static str, ShutdownSignalError> {
    let mut terminate = signal::unix::signal(signal::unix::SignalKind::terminate()).map_err(
        |source| ShutdownSignalError {
            signal: "SIGTERM",
            source,
        },
    )?;

    tokio::select! {
        result = signal::ctrl_c() => {
            result.map_err(|source| ShutdownSignalError {
                signal: "Ctrl+C",
                source,
            })?;

            Ok("interrupt signal")
        }
        _ = terminate.recv() => Ok("terminate signal"),
    }
}

#[cfg(windows)]
async fn wait_for_signal() -> Result<&'static str, ShutdownSignalError> {
    signal::ctrl_c()
        .await
        .map_err(|source| ShutdownSignalError {
            signal: "Ctrl+C",
            source,
        })?;

    Ok("interrupt signal")
}
