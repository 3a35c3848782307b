//! Recipes API context.
//!
//! Recipes, the favorites and shopping cart of each user, and the shopping
//! list download.
//!
//! # Endpoints
//!
//! - [List recipes](#list-recipes)
//! - [Get a recipe](#get-a-recipe)
//! - [Publish a recipe](#publish-a-recipe)
//! - [Change a recipe](#change-a-recipe)
//! - [Replace a recipe](#replace-a-recipe)
//! - [Delete a recipe](#delete-a-recipe)
//! - [Favorites and shopping cart](#favorites-and-shopping-cart)
//! - [Download the shopping list](#download-the-shopping-list)
//!
//! # List recipes
//!
//! `GET /api/recipes/`
//!
//! **Query parameters**
//!
//! Name | Type | Description | Required | Example
//! ---|---|---|---|---
//! `page` | positive integer | Page number. | No | `2`
//! `limit` | positive integer | Page size. | No | `6`
//! `tags` | string | Tag slug. It can be repeated, recipes with any of the tags are returned. | No | `breakfast`
//! `author` | integer | Author id. | No | `1`
//! `is_favorited` | `0` or `1` | Only recipes in (or not in) the favorites of the user. | No | `1`
//! `is_in_shopping_cart` | `0` or `1` | Only recipes in (or not in) the shopping cart of the user. | No | `1`
//!
//! Anonymous clients asking for `is_favorited=1` or `is_in_shopping_cart=1`
//! get an empty list. The `0` values are ignored for them.
//!
//! A page past the last one, or a `page` that is not a positive integer,
//! gets `404`:
//!
//! ```json
//! {
//!   "detail": "Invalid page."
//! }
//! ```
//!
//! ```bash
//! curl "http://127.0.0.1:8000/api/recipes/?page=2&limit=6&tags=breakfast&tags=dinner"
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!   "count": 123,
//!   "next": "http://foodgram.example.org/api/recipes/?limit=6&tags=breakfast&tags=dinner&page=3",
//!   "previous": "http://foodgram.example.org/api/recipes/?limit=6&tags=breakfast&tags=dinner",
//!   "results": [
//!     {
//!       "id": 1,
//!       "tags": [
//!         {"id": 1, "name": "Breakfast", "color": "#E26C2D", "slug": "breakfast"}
//!       ],
//!       "author": {
//!         "email": "vpupkin@yandex.ru",
//!         "id": 1,
//!         "username": "vasya.pupkin",
//!         "first_name": "Vasya",
//!         "last_name": "Pupkin",
//!         "is_subscribed": false
//!       },
//!       "ingredients": [
//!         {"id": 1, "name": "egg", "measurement_unit": "pcs", "amount": 3}
//!       ],
//!       "is_favorited": true,
//!       "is_in_shopping_cart": false,
//!       "name": "Omelette",
//!       "image": "http://foodgram.example.org/media/recipes/images/image.png",
//!       "text": "Beat the eggs.",
//!       "cooking_time": 10
//!     }
//!   ]
//! }
//! ```
//!
//! # Get a recipe
//!
//! `GET /api/recipes/:id/`
//!
//! It returns one [`Recipe`](crate::servers::apis::v1::context::recipes::resources::Recipe)
//! like the ones in the list, or `404`.
//!
//! # Publish a recipe
//!
//! `POST /api/recipes/`
//!
//! It requires authentication.
//!
//! ```json
//! {
//!   "ingredients": [{"id": 1, "amount": 3}],
//!   "tags": [1, 2],
//!   "image": "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABAgMAAABieywaAAAACVBMVEUAAAD///9fX1/S0ecCAAAACXBIWXMAAA7EAAAOxAGVKw4bAAAACklEQVQImWNoAAAAggCByxOyYQAAAABJRU5ErkJggg==",
//!   "name": "Omelette",
//!   "text": "Beat the eggs.",
//!   "cooking_time": 10
//! }
//! ```
//!
//! It returns `201` with the recipe. Invalid data gets `400` with the
//! errors of each field:
//!
//! ```json
//! {
//!   "cooking_time": ["Ensure this value is greater than or equal to 1."]
//! }
//! ```
//!
//! # Change a recipe
//!
//! `PATCH /api/recipes/:id/`
//!
//! Same body as the publication, all the fields are optional. Tags and
//! ingredients, when present, replace the current ones. Only the author can
//! change the recipe, other users get `403`:
//!
//! ```json
//! {
//!   "detail": "You do not have permission to perform this action."
//! }
//! ```
//!
//! # Replace a recipe
//!
//! `PUT /api/recipes/:id/`
//!
//! Same body as the publication, and every field is required. The `image`
//! may be the URL of the current image to keep it.
//!
//! # Delete a recipe
//!
//! `DELETE /api/recipes/:id/`
//!
//! Only the author can delete it. It returns `204`.
//!
//! # Favorites and shopping cart
//!
//! Method | Path | Result
//! ---|---|---
//! `POST` | `/api/recipes/:id/favorite/` | `201` if added, `200` if it was already there
//! `DELETE` | `/api/recipes/:id/favorite/` | `204` if removed, `200` if it was not there
//! `POST` | `/api/recipes/:id/shopping_cart/` | `201` if added, `200` if it was already there
//! `DELETE` | `/api/recipes/:id/shopping_cart/` | `204` if removed, `200` if it was not there
//!
//! The `200` and `201` responses contain the short form of the recipe:
//!
//! ```json
//! {
//!   "id": 1,
//!   "name": "Omelette",
//!   "image": "http://foodgram.example.org/media/recipes/images/image.png",
//!   "cooking_time": 10
//! }
//! ```
//!
//! # Download the shopping list
//!
//! `GET /api/recipes/download_shopping_cart/`
//!
//! It returns a PDF document with the ingredients of all the recipes in the
//! shopping cart, adding up the amounts of the same ingredient:
//!
//! ```text
//! Shopping list:
//! 1) egg - 6 pcs
//! 2) milk - 200 ml
//! ```
//!
//! The response has the headers:
//!
//! ```text
//! Content-Type: application/pdf
//! Content-Disposition: attachment; filename="shopping_list.pdf"
//! ```
pub mod forms;
pub mod handlers;
pub mod resources;
pub mod routes;
