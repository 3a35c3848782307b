//! Setup for the main application.
//!
//! The [`setup`] function loads the configuration, initializes the logging
//! and builds the domain layer. The database tables are created if they do
//! not exist yet.
use std::sync::Arc;

use foodgram_configuration::Configuration;
use tracing::info;

use crate::bootstrap;
use crate::core::services::foodgram_factory;
use crate::core::Foodgram;

/// It loads the configuration from the environment and builds the application.
#[must_use]
pub fn setup() -> (Arc<Configuration>, Arc<Foodgram>) {
    let configuration = Arc::new(bootstrap::config::initialize_configuration());
    let foodgram = initialize_with_configuration(&configuration);

    (configuration, foodgram)
}

/// It initializes the application with the given configuration.
#[must_use]
pub fn initialize_with_configuration(configuration: &Arc<Configuration>) -> Arc<Foodgram> {
    initialize_logging(configuration);
    Arc::new(initialize_foodgram(configuration))
}

/// It builds the domain layer.
#[must_use]
pub fn initialize_foodgram(config: &Arc<Configuration>) -> Foodgram {
    let foodgram = foodgram_factory(config);

    info!(driver = %config.core.database.driver, "Foodgram initialized");

    foodgram
}

/// It initializes the log threshold and format.
pub fn initialize_logging(config: &Arc<Configuration>) {
    bootstrap::logging::setup(config);
}
