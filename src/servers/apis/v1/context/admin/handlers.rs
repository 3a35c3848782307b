//! API handlers for the [`admin`](crate::servers::apis::v1::context::admin)
//! API context.
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use tracing::info;

use super::forms::{IngredientBody, TagBody};
use super::resources::{Imported, Stats};
use crate::core::catalog::IngredientForm;
use crate::core::recipes::Collection;
use crate::core::Foodgram;
use crate::servers::apis::v1::context::ingredients::resources::Ingredient;
use crate::servers::apis::v1::context::tags::resources::Tag;
use crate::servers::apis::v1::extractors::json::JsonBody;
use crate::servers::apis::v1::responses::{error_response, json_response, not_found_response, ok_response};
use crate::servers::apis::IdParam;
use crate::servers::logging::API_LOG_TARGET;

/// It handles the request to add a tag.
pub async fn create_tag_handler(State(foodgram): State<Arc<Foodgram>>, JsonBody(body): JsonBody<TagBody>) -> Response {
    match foodgram.create_tag(&body.into()) {
        Ok(tag) => json_response(StatusCode::CREATED, &Tag::from(tag)),
        Err(e) => error_response(&e),
    }
}

/// It handles the request to delete a tag. The tag is also removed from the
/// recipes.
pub async fn delete_tag_handler(State(foodgram): State<Arc<Foodgram>>, Path(id): Path<IdParam>) -> Response {
    let Some(tag_id) = id.value() else {
        return not_found_response();
    };

    match foodgram.delete_tag(tag_id) {
        Ok(()) => ok_response(),
        Err(e) => error_response(&e),
    }
}

/// It handles the request to add an ingredient.
pub async fn create_ingredient_handler(
    State(foodgram): State<Arc<Foodgram>>,
    JsonBody(body): JsonBody<IngredientBody>,
) -> Response {
    match foodgram.create_ingredient(&body.into()) {
        Ok(ingredient) => json_response(StatusCode::CREATED, &Ingredient::from(ingredient)),
        Err(e) => error_response(&e),
    }
}

/// It handles the request to add many ingredients at once.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::admin#import-ingredients)
/// for more information about this endpoint.
pub async fn import_ingredients_handler(
    State(foodgram): State<Arc<Foodgram>>,
    JsonBody(bodies): JsonBody<Vec<IngredientBody>>,
) -> Response {
    let forms: Vec<IngredientForm> = bodies.into_iter().map(IngredientForm::from).collect();

    match foodgram.import_ingredients(&forms) {
        Ok(imported) => {
            info!(target: API_LOG_TARGET, imported, received = forms.len(), "ingredients imported");
            json_response(StatusCode::OK, &Imported { imported })
        }
        Err(e) => error_response(&e),
    }
}

/// It handles the request to delete an ingredient.
pub async fn delete_ingredient_handler(State(foodgram): State<Arc<Foodgram>>, Path(id): Path<IdParam>) -> Response {
    let Some(ingredient_id) = id.value() else {
        return not_found_response();
    };

    match foodgram.delete_ingredient(ingredient_id) {
        Ok(()) => ok_response(),
        Err(e) => error_response(&e),
    }
}

/// It handles the request to delete a user, with their recipes.
pub async fn delete_user_handler(State(foodgram): State<Arc<Foodgram>>, Path(id): Path<IdParam>) -> Response {
    let Some(user_id) = id.value() else {
        return not_found_response();
    };

    match foodgram.delete_user(user_id) {
        Ok(()) => ok_response(),
        Err(e) => error_response(&e),
    }
}

/// It handles the request to get the usage counters of a recipe.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::admin#recipe-stats)
/// for more information about this endpoint.
pub async fn recipe_stats_handler(State(foodgram): State<Arc<Foodgram>>, Path(id): Path<IdParam>) -> Response {
    let Some(recipe_id) = id.value() else {
        return not_found_response();
    };

    let stats = foodgram.get_recipe(recipe_id).and_then(|recipe| {
        Ok(Stats {
            favorites_count: foodgram.collection_count(Collection::Favorites, recipe.id)?,
            id: recipe.id,
            name: recipe.name,
        })
    });

    match stats {
        Ok(stats) => json_response(StatusCode::OK, &stats),
        Err(e) => error_response(&e),
    }
}
