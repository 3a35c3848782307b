//! API routes for the [`admin`](crate::servers::apis::v1::context::admin) API context.
use std::sync::Arc;

use axum::routing::{delete, get, post};
use axum::Router;

use super::handlers::{
    create_ingredient_handler, create_tag_handler, delete_ingredient_handler, delete_tag_handler, delete_user_handler,
    import_ingredients_handler, recipe_stats_handler,
};
use crate::core::Foodgram;

/// It adds the routes to the router for the [`admin`](crate::servers::apis::v1::context::admin) API context.
pub fn add(prefix: &str, router: Router, foodgram: Arc<Foodgram>) -> Router {
    router
        // Tags
        .route(&format!("{prefix}/tags"), post(create_tag_handler).with_state(foodgram.clone()))
        .route(&format!("{prefix}/tags/:id"), delete(delete_tag_handler).with_state(foodgram.clone()))
        // Ingredients
        .route(
            &format!("{prefix}/ingredients"),
            post(create_ingredient_handler).with_state(foodgram.clone()),
        )
        .route(
            &format!("{prefix}/ingredients/import"),
            post(import_ingredients_handler).with_state(foodgram.clone()),
        )
        .route(
            &format!("{prefix}/ingredients/:id"),
            delete(delete_ingredient_handler).with_state(foodgram.clone()),
        )
        // Users
        .route(&format!("{prefix}/users/:id"), delete(delete_user_handler).with_state(foodgram.clone()))
        // Recipes
        .route(&format!("{prefix}/recipes/:id/stats"), get(recipe_stats_handler).with_state(foodgram))
}
