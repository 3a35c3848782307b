//! Shutdown signals for the running servers.
//!
//! A server stops when it receives a [`Halted`] message on its halt channel
//! or when the process receives `ctrl-c` or `SIGTERM`.
use std::time::Duration;

use derive_more::Display;
use tokio::sync::oneshot;
use tokio::time::sleep;
use tracing::info;

/// Maximum time given to open connections to finish after a shutdown signal.
pub const GRACE_PERIOD: Duration = Duration::from_secs(90);

/// Message sent to a running server to ask it to stop.
#[derive(Copy, Clone, Debug, Display)]
pub enum Halted {
    Normal,
}

/// Resolves on `ctrl_c` or the `terminate` signal.
///
/// # Panics
///
/// Will panic if the signal handlers cannot be installed.
pub async fn global_shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {}
    }
}

/// Resolves when the halt channel or the [`global_shutdown_signal`] resolves.
///
/// A dropped sender counts as a halt request.
pub async fn shutdown_signal(rx_halt: oneshot::Receiver<Halted>) {
    let halt = async {
        match rx_halt.await {
            Ok(signal) => signal,
            Err(_) => Halted::Normal,
        }
    };

    tokio::select! {
        signal = halt => { info!("Halt signal processed: {}", signal) },
        () = global_shutdown_signal() => { info!("Global shutdown signal processed") }
    }
}

/// Same as [`shutdown_signal`], but logs a message when it resolves.
pub async fn shutdown_signal_with_message(rx_halt: oneshot::Receiver<Halted>, message: String) {
    shutdown_signal(rx_halt).await;

    info!("{message}");
}

/// Waits for a shutdown signal and then stops the server behind `handle`,
/// giving the open connections [`GRACE_PERIOD`] to finish.
pub async fn graceful_shutdown(handle: axum_server::Handle, rx_halt: oneshot::Receiver<Halted>, message: String) {
    shutdown_signal_with_message(rx_halt, message).await;

    info!("Sending graceful shutdown signal");
    handle.graceful_shutdown(Some(GRACE_PERIOD));

    loop {
        let remaining = handle.connection_count();

        if remaining == 0 {
            break;
        }

        info!("remaining alive connections: {remaining}");

        sleep(Duration::from_secs(1)).await;
    }
}
