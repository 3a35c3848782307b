//! Middlewares for the API v1.
pub mod auth;
