//! API handlers for the [`recipes`](crate::servers::apis::v1::context::recipes)
//! API context.
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum_extra::extract::Query;

use super::forms::{ListQuery, RecipeBody};
use super::resources::{ImageUrls, Recipe, RecipeMinified};
use crate::core::recipes::{Collection, RecipeQuery};
use crate::core::services::recipe;
use crate::core::users::User;
use crate::core::{shopping_list, Foodgram};
use crate::servers::apis::v1::extractors::authentication::{Authenticated, MaybeAuthenticated};
use crate::servers::apis::v1::extractors::json::JsonBody;
use crate::servers::apis::v1::extractors::request_url::RequestUrl;
use crate::servers::apis::v1::pagination::{PaginationParams, Style, INVALID_PAGE};
use crate::servers::apis::v1::responses::{
    detail_response, error_response, field_errors_response, json_response, no_content_response, not_found_response,
};
use crate::servers::apis::IdParam;

/// It handles the request to list the recipes, newest first.
///
/// It returns `404` with `Invalid page.` when the page does not exist.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::recipes#list-recipes)
/// for more information about this endpoint.
pub async fn list_recipes_handler(
    State(foodgram): State<Arc<Foodgram>>,
    viewer: MaybeAuthenticated,
    url: RequestUrl,
    Query(params): Query<PaginationParams>,
    Query(query): Query<ListQuery>,
) -> Response {
    let pagination = Style::PageNumber.pagination(&params, foodgram.pagination_policy());

    let result = foodgram
        .list_recipes(viewer.user(), &RecipeQuery::from(query), &pagination)
        .and_then(|(recipes, count)| Ok((recipe::get_recipes_info(&foodgram, viewer.user(), recipes)?, count)));

    match result {
        Ok((_, count)) if Style::PageNumber.is_invalid_page(&params, &pagination, count) => {
            detail_response(StatusCode::NOT_FOUND, INVALID_PAGE)
        }
        Ok((recipes, count)) => {
            let images = ImageUrls::new(&url, foodgram.media());
            let recipes = recipes.into_iter().map(|info| Recipe::new(info, &images)).collect();
            json_response(StatusCode::OK, &Style::PageNumber.page(&url, &pagination, count, recipes))
        }
        Err(e) => error_response(&e),
    }
}

/// It handles the request to get one recipe.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::recipes#get-a-recipe)
/// for more information about this endpoint.
pub async fn get_recipe_handler(
    State(foodgram): State<Arc<Foodgram>>,
    viewer: MaybeAuthenticated,
    url: RequestUrl,
    Path(id): Path<IdParam>,
) -> Response {
    let Some(recipe_id) = id.value() else {
        return not_found_response();
    };

    recipe_response(&foodgram, viewer.user(), &url, recipe_id, StatusCode::OK)
}

/// It handles the request to publish a recipe.
///
/// It returns:
///
/// - `201` with the new [`Recipe`].
/// - `400` with the field errors if the data is not valid.
/// - `401` for anonymous clients.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::recipes#publish-a-recipe)
/// for more information about this endpoint.
pub async fn create_recipe_handler(
    State(foodgram): State<Arc<Foodgram>>,
    Authenticated(author): Authenticated,
    url: RequestUrl,
    JsonBody(body): JsonBody<RecipeBody>,
) -> Response {
    let form = match body.into_form() {
        Ok(form) => form,
        Err(errors) => return field_errors_response(&errors),
    };

    match foodgram.create_recipe(&author, &form) {
        Ok(created) => recipe_response(&foodgram, Some(&author), &url, created.id, StatusCode::CREATED),
        Err(e) => error_response(&e),
    }
}

/// It handles the request to change a recipe. Only the author can change it.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::recipes#change-a-recipe)
/// for more information about this endpoint.
pub async fn update_recipe_handler(
    State(foodgram): State<Arc<Foodgram>>,
    Authenticated(user): Authenticated,
    url: RequestUrl,
    Path(id): Path<IdParam>,
    JsonBody(body): JsonBody<RecipeBody>,
) -> Response {
    let Some(recipe_id) = id.value() else {
        return not_found_response();
    };

    let form = match body.into_form() {
        Ok(form) => form,
        Err(errors) => return field_errors_response(&errors),
    };

    match foodgram.update_recipe(&user, recipe_id, &form) {
        Ok(updated) => recipe_response(&foodgram, Some(&user), &url, updated.id, StatusCode::OK),
        Err(e) => error_response(&e),
    }
}

/// It handles the request to replace a recipe. Unlike a change, every field
/// is required. Only the author can replace it.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::recipes#replace-a-recipe)
/// for more information about this endpoint.
pub async fn replace_recipe_handler(
    State(foodgram): State<Arc<Foodgram>>,
    Authenticated(user): Authenticated,
    url: RequestUrl,
    Path(id): Path<IdParam>,
    JsonBody(body): JsonBody<RecipeBody>,
) -> Response {
    let Some(recipe_id) = id.value() else {
        return not_found_response();
    };

    let form = match body.into_form() {
        Ok(form) => form,
        Err(errors) => return field_errors_response(&errors),
    };

    match foodgram.replace_recipe(&user, recipe_id, &form) {
        Ok(replaced) => recipe_response(&foodgram, Some(&user), &url, replaced.id, StatusCode::OK),
        Err(e) => error_response(&e),
    }
}

/// It handles the request to delete a recipe. Only the author can delete it.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::recipes#delete-a-recipe)
/// for more information about this endpoint.
pub async fn delete_recipe_handler(
    State(foodgram): State<Arc<Foodgram>>,
    Authenticated(user): Authenticated,
    Path(id): Path<IdParam>,
) -> Response {
    let Some(recipe_id) = id.value() else {
        return not_found_response();
    };

    match foodgram.delete_recipe(&user, recipe_id) {
        Ok(()) => no_content_response(),
        Err(e) => error_response(&e),
    }
}

/// It handles the request to add a recipe to the favorites.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::recipes#favorites-and-shopping-cart)
/// for more information about this endpoint.
pub async fn add_favorite_handler(
    State(foodgram): State<Arc<Foodgram>>,
    Authenticated(user): Authenticated,
    url: RequestUrl,
    Path(id): Path<IdParam>,
) -> Response {
    add_to_collection(&foodgram, &user, &url, Collection::Favorites, &id)
}

/// It handles the request to remove a recipe from the favorites.
pub async fn remove_favorite_handler(
    State(foodgram): State<Arc<Foodgram>>,
    Authenticated(user): Authenticated,
    url: RequestUrl,
    Path(id): Path<IdParam>,
) -> Response {
    remove_from_collection(&foodgram, &user, &url, Collection::Favorites, &id)
}

/// It handles the request to add a recipe to the shopping cart.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::recipes#favorites-and-shopping-cart)
/// for more information about this endpoint.
pub async fn add_to_shopping_cart_handler(
    State(foodgram): State<Arc<Foodgram>>,
    Authenticated(user): Authenticated,
    url: RequestUrl,
    Path(id): Path<IdParam>,
) -> Response {
    add_to_collection(&foodgram, &user, &url, Collection::ShoppingCart, &id)
}

/// It handles the request to remove a recipe from the shopping cart.
pub async fn remove_from_shopping_cart_handler(
    State(foodgram): State<Arc<Foodgram>>,
    Authenticated(user): Authenticated,
    url: RequestUrl,
    Path(id): Path<IdParam>,
) -> Response {
    remove_from_collection(&foodgram, &user, &url, Collection::ShoppingCart, &id)
}

/// It handles the request to download the shopping list of the user as a
/// PDF document.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::recipes#download-the-shopping-list)
/// for more information about this endpoint.
pub async fn download_shopping_cart_handler(
    State(foodgram): State<Arc<Foodgram>>,
    Authenticated(user): Authenticated,
) -> Response {
    match foodgram.shopping_list_pdf(&user) {
        Ok(document) => (
            [
                (header::CONTENT_TYPE, shopping_list::CONTENT_TYPE.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", shopping_list::FILE_NAME),
                ),
            ],
            document,
        )
            .into_response(),
        Err(e) => error_response(&e),
    }
}

fn recipe_response(foodgram: &Foodgram, viewer: Option<&User>, url: &RequestUrl, recipe_id: i64, status: StatusCode) -> Response {
    match recipe::get_recipe_info(foodgram, viewer, recipe_id) {
        Ok(info) => json_response(status, &Recipe::new(info, &ImageUrls::new(url, foodgram.media()))),
        Err(e) => error_response(&e),
    }
}

/// `201` when the recipe was added, `200` when it was already there.
fn add_to_collection(foodgram: &Foodgram, user: &User, url: &RequestUrl, collection: Collection, id: &IdParam) -> Response {
    let Some(recipe_id) = id.value() else {
        return not_found_response();
    };

    match foodgram.add_to_collection(user, collection, recipe_id) {
        Ok((recipe, added)) => {
            let status = if added { StatusCode::CREATED } else { StatusCode::OK };
            json_response(status, &RecipeMinified::new(recipe, &ImageUrls::new(url, foodgram.media())))
        }
        Err(e) => error_response(&e),
    }
}

/// `204` when the recipe was removed, `200` with the recipe when it was not
/// there.
fn remove_from_collection(foodgram: &Foodgram, user: &User, url: &RequestUrl, collection: Collection, id: &IdParam) -> Response {
    let Some(recipe_id) = id.value() else {
        return not_found_response();
    };

    match foodgram.remove_from_collection(user, collection, recipe_id) {
        Ok((_, true)) => no_content_response(),
        Ok((recipe, false)) => json_response(
            StatusCode::OK,
            &RecipeMinified::new(recipe, &ImageUrls::new(url, foodgram.media())),
        ),
        Err(e) => error_response(&e),
    }
}
