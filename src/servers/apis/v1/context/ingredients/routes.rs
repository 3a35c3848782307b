//! API routes for the [`ingredients`](crate::servers::apis::v1::context::ingredients) API context.
use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use super::handlers::{get_ingredient_handler, list_ingredients_handler};
use crate::core::Foodgram;

/// It adds the routes to the router for the [`ingredients`](crate::servers::apis::v1::context::ingredients) API context.
pub fn add(prefix: &str, router: Router, foodgram: Arc<Foodgram>) -> Router {
    router
        .route(
            &format!("{prefix}/ingredients"),
            get(list_ingredients_handler).with_state(foodgram.clone()),
        )
        .route(&format!("{prefix}/ingredients/:id"), get(get_ingredient_handler).with_state(foodgram))
}
