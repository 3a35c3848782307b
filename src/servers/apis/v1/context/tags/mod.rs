//! Tags API context.
//!
//! Tags classify recipes, for example "Breakfast" or "Dinner". They are
//! managed by the administrators with the [`admin`](crate::servers::apis::v1::context::admin)
//! API. This context is read only and does not require authentication.
//!
//! # Endpoints
//!
//! - [List tags](#list-tags)
//! - [Get a tag](#get-a-tag)
//!
//! # List tags
//!
//! `GET /api/tags/`
//!
//! It returns all the tags. The list is not paginated.
//!
//! **Example request**
//!
//! ```bash
//! curl "http://127.0.0.1:8000/api/tags/"
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! [
//!   {
//!     "id": 1,
//!     "name": "Breakfast",
//!     "color": "#E26C2D",
//!     "slug": "breakfast"
//!   }
//! ]
//! ```
//!
//! # Get a tag
//!
//! `GET /api/tags/:id/`
//!
//! **Path parameters**
//!
//! Name | Type | Description | Required | Example
//! ---|---|---|---|---
//! `id` | positive integer | The tag id. | Yes | `1`
//!
//! **Example request**
//!
//! ```bash
//! curl "http://127.0.0.1:8000/api/tags/1/"
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!   "id": 1,
//!   "name": "Breakfast",
//!   "color": "#E26C2D",
//!   "slug": "breakfast"
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
//!
//! **Resource**
//!
//! Refer to the API [`Tag`](crate::servers::apis::v1::context::tags::resources::Tag)
//! resource for more information about the response attributes.
pub mod handlers;
pub mod resources;
pub mod routes;
