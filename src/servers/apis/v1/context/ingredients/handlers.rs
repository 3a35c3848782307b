//! API handlers for the [`ingredients`](crate::servers::apis::v1::context::ingredients)
//! API context.
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Response;

use super::resources::{Ingredient, ListQuery};
use crate::core::Foodgram;
use crate::servers::apis::v1::responses::{error_response, json_response, not_found_response};
use crate::servers::apis::IdParam;

/// It handles the request to list the ingredients, optionally filtered by
/// the beginning of the name.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::ingredients#list-ingredients)
/// for more information about this endpoint.
pub async fn list_ingredients_handler(State(foodgram): State<Arc<Foodgram>>, Query(query): Query<ListQuery>) -> Response {
    match foodgram.list_ingredients(query.name.as_deref()) {
        Ok(ingredients) => json_response(
            StatusCode::OK,
            &ingredients.into_iter().map(Ingredient::from).collect::<Vec<_>>(),
        ),
        Err(e) => error_response(&e),
    }
}

/// It handles the request to get one ingredient.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::ingredients#get-an-ingredient)
/// for more information about this endpoint.
pub async fn get_ingredient_handler(State(foodgram): State<Arc<Foodgram>>, Path(id): Path<IdParam>) -> Response {
    let Some(ingredient_id) = id.value() else {
        return not_found_response();
    };

    match foodgram.get_ingredient(ingredient_id) {
        Ok(ingredient) => json_response(StatusCode::OK, &Ingredient::from(ingredient)),
        Err(e) => error_response(&e),
    }
}
