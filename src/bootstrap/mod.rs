//! Application bootstrapping.
//!
//! This module includes all the functions to build the application, its
//! dependencies, and run the jobs.
//!
//! The only job is the REST API server. It runs in its own task until the
//! process receives a shutdown signal.
pub mod app;
pub mod config;
pub mod jobs;
pub mod logging;
