//! Foodgram application.
//!
//! The application is a container for the jobs started from the
//! configuration. There is only one job for now, the REST API.
use std::sync::Arc;

use foodgram_configuration::Configuration;
use tokio::task::JoinHandle;

use crate::bootstrap::jobs::api;
use crate::core::Foodgram;

/// It starts the jobs and returns their handles.
///
/// # Panics
///
/// Will panic if the API can not be started.
pub async fn start(config: &Configuration, foodgram: Arc<Foodgram>) -> Vec<JoinHandle<()>> {
    let mut jobs: Vec<JoinHandle<()>> = Vec::new();

    // Start HTTP API
    jobs.push(api::start_job(&config.http_api, foodgram).await);

    jobs
}
