//! Ingredients API context.
//!
//! The ingredients catalog used to compose recipes. Read only and public.
//!
//! # Endpoints
//!
//! - [List ingredients](#list-ingredients)
//! - [Get an ingredient](#get-an-ingredient)
//!
//! # List ingredients
//!
//! `GET /api/ingredients/`
//!
//! It returns all the ingredients, ordered by name. The list is not
//! paginated.
//!
//! **Query parameters**
//!
//! Name | Type | Description | Required | Example
//! ---|---|---|---|---
//! `name` | string | Only ingredients whose name starts with it, ignoring case. | No | `sug`
//!
//! **Example request**
//!
//! ```bash
//! curl "http://127.0.0.1:8000/api/ingredients/?name=sug"
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! [
//!   {
//!     "id": 1,
//!     "name": "sugar",
//!     "measurement_unit": "g"
//!   }
//! ]
//! ```
//!
//! # Get an ingredient
//!
//! `GET /api/ingredients/:id/`
//!
//! **Example request**
//!
//! ```bash
//! curl "http://127.0.0.1:8000/api/ingredients/1/"
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!   "id": 1,
//!   "name": "sugar",
//!   "measurement_unit": "g"
//! }
//! ```
//!
//! **Not found response** `404`
//!
//! ```json
//! {
//!   "detail": "Not found."
//! }
//! ```
pub mod handlers;
pub mod resources;
pub mod routes;
