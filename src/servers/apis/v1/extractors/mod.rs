//! Axum [`extractors`](axum::extract) for the API v1.
//!
//! - [`authentication`]: the user that sent the request.
//! - [`json`]: request bodies with DRF-like parse errors.
//! - [`request_url`]: the absolute URL of the request, used to build
//!   pagination links.
pub mod authentication;
pub mod json;
pub mod request_url;
