//! Administration API context.
//!
//! It manages the catalogs of tags and ingredients and the users. These
//! endpoints are not used by the web client, they are for the site
//! administrators.
//!
//! All the endpoints require the `token` query param with one of the
//! [admin access tokens](crate::servers::apis::v1::middlewares::auth).
//!
//! # Endpoints
//!
//! Method | Path | Body | Response
//! ---|---|---|---
//! `POST` | `/api/admin/tags` | `{"name", "color", "slug"}` | `201` with the tag
//! `DELETE` | `/api/admin/tags/:id` | | `{"status": "ok"}`
//! `POST` | `/api/admin/ingredients` | `{"name", "measurement_unit"}` | `201` with the ingredient
//! `POST` | `/api/admin/ingredients/import` | `[{"name", "measurement_unit"}]` | `{"imported": 2}`
//! `DELETE` | `/api/admin/ingredients/:id` | | `{"status": "ok"}`
//! `DELETE` | `/api/admin/users/:id` | | `{"status": "ok"}`
//! `GET` | `/api/admin/recipes/:id/stats` | | `{"id", "name", "favorites_count"}`
//!
//! Unknown ids get `404`. Invalid bodies get `400` with the field errors.
//!
//! # Create a tag
//!
//! ```bash
//! curl -X POST "http://127.0.0.1:8000/api/admin/tags?token=MyAccessToken" \
//!   -H "Content-Type: application/json" \
//!   -d '{"name": "Breakfast", "color": "#E26C2D", "slug": "breakfast"}'
//! ```
//!
//! The color must be a hex color code like `#E26C2D`. Names, colors and
//! slugs are unique.
//!
//! # Import ingredients
//!
//! ```bash
//! curl -X POST "http://127.0.0.1:8000/api/admin/ingredients/import?token=MyAccessToken" \
//!   -H "Content-Type: application/json" \
//!   -d '[{"name": "sugar", "measurement_unit": "g"}, {"name": "egg", "measurement_unit": "pcs"}]'
//! ```
//!
//! Ingredients already in the catalog, with the same name and unit, are
//! skipped. The response has the number of ingredients added:
//!
//! ```json
//! {
//!   "imported": 2
//! }
//! ```
//!
//! # Recipe stats
//!
//! ```bash
//! curl "http://127.0.0.1:8000/api/admin/recipes/1/stats?token=MyAccessToken"
//! ```
//!
//! ```json
//! {
//!   "id": 1,
//!   "name": "Omelette",
//!   "favorites_count": 12
//! }
//! ```
pub mod forms;
pub mod handlers;
pub mod resources;
pub mod routes;
