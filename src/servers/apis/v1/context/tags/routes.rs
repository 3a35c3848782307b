//! API routes for the [`tags`](crate::servers::apis::v1::context::tags) API context.
use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use super::handlers::{get_tag_handler, list_tags_handler};
use crate::core::Foodgram;

/// It adds the routes to the router for the [`tags`](crate::servers::apis::v1::context::tags) API context.
pub fn add(prefix: &str, router: Router, foodgram: Arc<Foodgram>) -> Router {
    router
        .route(&format!("{prefix}/tags"), get(list_tags_handler).with_state(foodgram.clone()))
        .route(&format!("{prefix}/tags/:id"), get(get_tag_handler).with_state(foodgram))
}
