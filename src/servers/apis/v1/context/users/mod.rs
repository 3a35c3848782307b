//! Users API context.
//!
//! Registration, profiles, passwords and subscriptions to authors.
//!
//! # Endpoints
//!
//! - [List users](#list-users)
//! - [Register](#register)
//! - [Get a user](#get-a-user)
//! - [Current user](#current-user)
//! - [Set password](#set-password)
//! - [List subscriptions](#list-subscriptions)
//! - [Subscribe](#subscribe)
//! - [Unsubscribe](#unsubscribe)
//!
//! # List users
//!
//! `GET /api/users/`
//!
//! **Query parameters**
//!
//! Name | Type | Description | Required | Example
//! ---|---|---|---|---
//! `limit` | positive integer | Page size. | No | `10`
//! `offset` | integer | Number of users to skip. | No | `20`
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!   "count": 123,
//!   "next": "http://foodgram.example.org/api/users/?limit=1&offset=1",
//!   "previous": null,
//!   "results": [
//!     {
//!       "email": "vpupkin@yandex.ru",
//!       "id": 1,
//!       "username": "vasya.pupkin",
//!       "first_name": "Vasya",
//!       "last_name": "Pupkin",
//!       "is_subscribed": false
//!     }
//!   ]
//! }
//! ```
//!
//! # Register
//!
//! `POST /api/users/`
//!
//! All the fields are required.
//!
//! ```bash
//! curl -X POST "http://127.0.0.1:8000/api/users/" \
//!   -H "Content-Type: application/json" \
//!   -d '{"email": "vpupkin@yandex.ru", "username": "vasya.pupkin", "first_name": "Vasya", "last_name": "Pupkin", "password": "Qwerty123"}'
//! ```
//!
//! **Example response** `201`
//!
//! ```json
//! {
//!   "email": "vpupkin@yandex.ru",
//!   "id": 1,
//!   "username": "vasya.pupkin",
//!   "first_name": "Vasya",
//!   "last_name": "Pupkin"
//! }
//! ```
//!
//! **Validation error response** `400`
//!
//! ```json
//! {
//!   "username": ["A user with that username already exists."]
//! }
//! ```
//!
//! # Get a user
//!
//! `GET /api/users/:id/`
//!
//! It returns the user with the same attributes as the list. `404` if the
//! user does not exist.
//!
//! # Current user
//!
//! `GET /api/users/me/`
//!
//! It requires authentication.
//!
//! # Set password
//!
//! `POST /api/users/set_password/`
//!
//! ```json
//! {
//!   "new_password": "string",
//!   "current_password": "string"
//! }
//! ```
//!
//! It returns `204`, or `400` with the field errors:
//!
//! ```json
//! {
//!   "current_password": ["Invalid current password"]
//! }
//! ```
//!
//! # List subscriptions
//!
//! `GET /api/users/subscriptions/`
//!
//! The authors the user is subscribed to, paginated like the users list.
//! The `recipes_limit` query param limits the recipes of each author.
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!   "count": 1,
//!   "next": null,
//!   "previous": null,
//!   "results": [
//!     {
//!       "email": "vpupkin@yandex.ru",
//!       "id": 1,
//!       "username": "vasya.pupkin",
//!       "first_name": "Vasya",
//!       "last_name": "Pupkin",
//!       "is_subscribed": true,
//!       "recipes": [
//!         {
//!           "id": 1,
//!           "name": "Omelette",
//!           "image": "http://foodgram.example.org/media/recipes/images/image.png",
//!           "cooking_time": 10
//!         }
//!       ],
//!       "recipes_count": 1
//!     }
//!   ]
//! }
//! ```
//!
//! # Subscribe
//!
//! `POST /api/users/:id/subscribe/`
//!
//! It returns `201` with the author, like one result of the subscriptions
//! list. It also accepts `recipes_limit`.
//!
//! **Rejected response** `400`
//!
//! ```json
//! {
//!   "errors": "You cannot subscribe to yourself."
//! }
//! ```
//!
//! # Unsubscribe
//!
//! `DELETE /api/users/:id/subscribe/`
//!
//! It returns `204`, or `400` with `{"errors": ...}` if the user was not
//! subscribed.
pub mod forms;
pub mod handlers;
pub mod resources;
pub mod routes;
