//! Logic to run the REST API server.
//!
//! It contains two main structs: `ApiServer` and `Launcher`.
//!
//! The `ApiServer` struct is responsible for:
//! - Starting and stopping the server.
//! - Storing the configuration.
//!
//! `ApiServer` is a state machine that can be in one of two
//! states: `Stopped` or `Running`.
//!
//! The `Launcher` struct is responsible for binding the socket and serving
//! the [router](crate::servers::apis::routes::router) over HTTP or HTTPS,
//! with graceful shutdown.
//!
//! Starting the server takes two steps:
//!
//! 1. `ApiServer::start` -> spawns new asynchronous task.
//! 2. `Launcher::start` -> starts the server on the spawned task.
//!
//! Tests start and stop the server many times in the same process. The
//! `main` application starts it once and keeps it running until the
//! process receives a shutdown signal.
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::Request;
use axum::ServiceExt;
use axum_server::tls_rustls::RustlsConfig;
use axum_server::Handle;
use derive_more::Constructor;
use foodgram_configuration::AccessTokens;
use futures::future::BoxFuture;
use tokio::sync::oneshot::{Receiver, Sender};
use tokio::task::JoinHandle;
use tracing::{error, info};

use super::routes::router;
use crate::bootstrap::jobs::Started;
use crate::core::Foodgram;
use crate::servers::logging::{API_LOG_TARGET, STARTED_ON};
use crate::servers::signals::{graceful_shutdown, Halted};

/// Errors that can occur when starting or stopping the API server.
#[derive(Debug)]
pub enum Error {
    Error(String),
}

/// An API server in `stopped` state.
#[allow(clippy::module_name_repetitions)]
pub type StoppedApiServer = ApiServer<Stopped>;

/// An API server in `running` state.
#[allow(clippy::module_name_repetitions)]
pub type RunningApiServer = ApiServer<Running>;

/// A REST API server controller.
#[allow(clippy::module_name_repetitions)]
pub struct ApiServer<S> {
    pub state: S,
}

/// The `Stopped` state of the `ApiServer` struct.
pub struct Stopped {
    launcher: Launcher,
}

/// The `Running` state of the `ApiServer` struct.
pub struct Running {
    /// The address where the server is bound.
    pub binding: SocketAddr,
    pub halt_task: Sender<Halted>,
    pub task: JoinHandle<Launcher>,
}

impl ApiServer<Stopped> {
    #[must_use]
    pub fn new(launcher: Launcher) -> Self {
        Self {
            state: Stopped { launcher },
        }
    }

    /// Starts the API server with the given configuration.
    ///
    /// # Errors
    ///
    /// It would return an error if no confirmation is received from the
    /// spawned task that it has started.
    pub async fn start(self, foodgram: Arc<Foodgram>, access_tokens: Arc<AccessTokens>) -> Result<ApiServer<Running>, Error> {
        let (tx_start, rx_start) = tokio::sync::oneshot::channel::<Started>();
        let (tx_halt, rx_halt) = tokio::sync::oneshot::channel::<Halted>();

        let launcher = self.state.launcher;

        let task = tokio::spawn(async move {
            let server = launcher.start(foodgram, access_tokens, tx_start, rx_halt);

            server.await;

            launcher
        });

        let started = rx_start.await.map_err(|err| {
            let msg = format!("Unable to start API server: {err}");
            error!(target: API_LOG_TARGET, "{}", msg);
            Error::Error(msg)
        })?;

        Ok(ApiServer {
            state: Running {
                binding: started.address,
                halt_task: tx_halt,
                task,
            },
        })
    }
}

impl ApiServer<Running> {
    /// Stops the API server.
    ///
    /// # Errors
    ///
    /// It would return an error if the channel for the task killer signal was
    /// closed or the server task did not finish.
    pub async fn stop(self) -> Result<ApiServer<Stopped>, Error> {
        self.state
            .halt_task
            .send(Halted::Normal)
            .map_err(|_| Error::Error("Task killer channel was closed.".to_string()))?;

        let launcher = self.state.task.await.map_err(|e| Error::Error(e.to_string()))?;

        Ok(ApiServer {
            state: Stopped { launcher },
        })
    }
}

/// A struct responsible for starting the API server.
#[derive(Constructor)]
pub struct Launcher {
    bind_to: SocketAddr,
    tls: Option<RustlsConfig>,
}

impl Launcher {
    /// Starts the API server with graceful shutdown.
    ///
    /// If TLS is enabled in the configuration, it will start the server with
    /// TLS.
    ///
    /// # Panics
    ///
    /// Will panic if unable to bind to the socket, or unable to get the address
    /// of the bound socket. Will also panic if unable to send message
    /// regarding the bound socket address.
    pub fn start(
        &self,
        foodgram: Arc<Foodgram>,
        access_tokens: Arc<AccessTokens>,
        tx_start: Sender<Started>,
        rx_halt: Receiver<Halted>,
    ) -> BoxFuture<'static, ()> {
        let socket = std::net::TcpListener::bind(self.bind_to).expect("Could not bind tcp_listener to address.");
        let address = socket.local_addr().expect("Could not get local_addr from tcp_listener.");

        let router = router(foodgram, access_tokens);

        let handle = Handle::new();

        tokio::task::spawn(graceful_shutdown(
            handle.clone(),
            rx_halt,
            format!("Shutting down API server on socket address: {address}"),
        ));

        let tls = self.tls.clone();
        let protocol = if tls.is_some() { "https" } else { "http" };

        info!(target: API_LOG_TARGET, "Starting on {protocol}://{}", address);

        let running = Box::pin(async move {
            match tls {
                Some(tls) => axum_server::from_tcp_rustls(socket, tls)
                    .handle(handle)
                    .serve(ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(router))
                    .await
                    .expect("Axum server crashed."),
                None => axum_server::from_tcp(socket)
                    .handle(handle)
                    .serve(ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(router))
                    .await
                    .expect("Axum server crashed."),
            }
        });

        info!(target: API_LOG_TARGET, "{STARTED_ON} {protocol}://{}", address);

        tx_start
            .send(Started { address })
            .expect("the API server should not be dropped");

        running
    }
}
