//! API routes for the [`recipes`](crate::servers::apis::v1::context::recipes) API context.
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    add_favorite_handler, add_to_shopping_cart_handler, create_recipe_handler, delete_recipe_handler,
    download_shopping_cart_handler, get_recipe_handler, list_recipes_handler, remove_favorite_handler,
    remove_from_shopping_cart_handler, replace_recipe_handler, update_recipe_handler,
};
use crate::core::Foodgram;

/// It adds the routes to the router for the [`recipes`](crate::servers::apis::v1::context::recipes) API context.
pub fn add(prefix: &str, router: Router, foodgram: Arc<Foodgram>) -> Router {
    router
        .route(
            &format!("{prefix}/recipes"),
            get(list_recipes_handler)
                .with_state(foodgram.clone())
                .post(create_recipe_handler)
                .with_state(foodgram.clone()),
        )
        .route(
            &format!("{prefix}/recipes/download_shopping_cart"),
            get(download_shopping_cart_handler).with_state(foodgram.clone()),
        )
        .route(
            &format!("{prefix}/recipes/:id"),
            get(get_recipe_handler)
                .with_state(foodgram.clone())
                .patch(update_recipe_handler)
                .with_state(foodgram.clone())
                .put(replace_recipe_handler)
                .with_state(foodgram.clone())
                .delete(delete_recipe_handler)
                .with_state(foodgram.clone()),
        )
        .route(
            &format!("{prefix}/recipes/:id/favorite"),
            post(add_favorite_handler)
                .with_state(foodgram.clone())
                .delete(remove_favorite_handler)
                .with_state(foodgram.clone()),
        )
        .route(
            &format!("{prefix}/recipes/:id/shopping_cart"),
            post(add_to_shopping_cart_handler)
                .with_state(foodgram.clone())
                .delete(remove_from_shopping_cart_handler)
                .with_state(foodgram),
        )
}
