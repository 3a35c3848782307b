//! The API version `v1`.
//!
//! The API is organized in the following contexts:
//!
//! Context | Description | Version
//! ---|---|---
//! `Users` | Registration, profiles and subscriptions | [`v1`](crate::servers::apis::v1::context::users)
//! `Auth token` | Login and logout | [`v1`](crate::servers::apis::v1::context::auth_token)
//! `Tags` | Recipe tags | [`v1`](crate::servers::apis::v1::context::tags)
//! `Ingredients` | Ingredients | [`v1`](crate::servers::apis::v1::context::ingredients)
//! `Recipes` | Recipes, favorites, shopping cart and shopping list | [`v1`](crate::servers::apis::v1::context::recipes)
//! `Admin` | Catalog management and moderation | [`v1`](crate::servers::apis::v1::context::admin)
//! `Health check` | Service status | [`v1`](crate::servers::apis::v1::context::health_check)
//!
//! Refer to the [authentication extractors](crate::servers::apis::v1::extractors::authentication)
//! for the user authentication, and to the [authentication middleware](crate::servers::apis::v1::middlewares::auth)
//! for the admin authentication.
pub mod context;
pub mod extractors;
pub mod forms;
pub mod middlewares;
pub mod pagination;
pub mod responses;
pub mod routes;
