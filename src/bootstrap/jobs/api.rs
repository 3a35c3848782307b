//! Job that runs the REST API.
//!
//! The [`start_job`] function spawns a new task that runs the API server
//! until it receives a shutdown signal.
use std::sync::Arc;

use foodgram_configuration::HttpApi;
use tokio::task::JoinHandle;
use tracing::info;

use super::make_rust_tls;
use crate::core::Foodgram;
use crate::servers::apis::server::{ApiServer, Launcher};
use crate::servers::logging::API_LOG_TARGET;

/// This function starts a new API server with the provided configuration.
///
/// The functions starts a new concurrent task that will run the API server.
/// The returned handle resolves when the server stops.
///
/// # Panics
///
/// It would panic if the TLS configuration is not valid or the server cannot
/// be started.
pub async fn start_job(config: &HttpApi, foodgram: Arc<Foodgram>) -> JoinHandle<()> {
    let bind_to = config.bind_address;

    let tls = make_rust_tls(&config.tsl_config)
        .await
        .map(|tls| tls.expect("it should have a valid api tls configuration"));

    let access_tokens = Arc::new(config.access_tokens.clone());

    let server = ApiServer::new(Launcher::new(bind_to, tls))
        .start(foodgram, access_tokens)
        .await
        .expect("it should be able to start the api");

    info!(target: API_LOG_TARGET, "API job running on {}", server.state.binding);

    tokio::spawn(async move {
        assert!(!server.state.halt_task.is_closed(), "Halt channel should be open");
        server.state.task.await.expect("failed to close service");
    })
}
