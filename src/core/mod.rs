//! The core `foodgram` module contains the recipe sharing logic, which is
//! independent of the delivery layer.
//!
//! It contains the domain services and their dependencies. It does not
//! specify how the end user connects to the application. The REST API in
//! [`servers::apis`](crate::servers::apis) is the only delivery layer:
//!
//! ```text
//! Delivery layer     Domain layer
//!
//!  Foodgram REST API |> Foodgram
//! ```
//!
//! # Table of contents
//!
//! - [Foodgram](#foodgram)
//! - [Users and authentication](#users-and-authentication)
//! - [Catalog](#catalog)
//! - [Recipes](#recipes)
//! - [Shopping list](#shopping-list)
//! - [Persistence](#persistence)
//! - [Errors](#errors)
//!
//! # Foodgram
//!
//! The [`Foodgram`] struct owns the database driver, the media storage and
//! the pagination policy. Each group of operations lives in its own module
//! as an `impl Foodgram` block:
//!
//! Module | Responsibilities
//! ---|---
//! [`users`] | Registration, login tokens, passwords and subscriptions to authors.
//! [`catalog`] | Tags and ingredients.
//! [`recipes`] | Recipes, favorites and the shopping cart.
//! [`shopping_list`] | Aggregating the shopping cart and exporting it.
//!
//! Operations are synchronous. Every method takes `&self`, so a single
//! instance is shared by the API handlers behind an `Arc`.
//!
//! # Users and authentication
//!
//! Users log in with their email and password and receive a login
//! [`Token`](auth::Token). See the [`auth`] module.
//!
//! # Catalog
//!
//! Tags and ingredients are managed by the administrators. Recipes reference
//! them by id.
//!
//! # Recipes
//!
//! Only the author of a recipe can change or delete it. Each recipe has one
//! image, stored by the [`media`] module.
//!
//! # Shopping list
//!
//! The shopping list sums the ingredients of every recipe in the user's
//! shopping cart. It can be exported as a PDF document.
//!
//! # Persistence
//!
//! See the [`databases`] module. `SQLite` and `MySQL` are supported.
//!
//! # Errors
//!
//! All the operations return [`error::Error`].
pub mod auth;
pub mod catalog;
pub mod databases;
pub mod error;
pub mod media;
pub mod recipes;
pub mod services;
pub mod shopping_list;
pub mod users;
pub mod validation;

use std::sync::Arc;

use camino::Utf8PathBuf;
use foodgram_configuration::{Core, PaginationPolicy};
use tracing::debug;

use self::databases::Database;

/// The domain layer.
pub struct Foodgram {
    /// A database driver implementation: [`Sqlite3`](crate::core::databases::sqlite)
    /// or [`MySQL`](crate::core::databases::mysql)
    pub database: Arc<Box<dyn Database>>,
    media: media::Storage,
    pagination: PaginationPolicy,
    shopping_list_font: Option<Utf8PathBuf>,
}

impl Foodgram {
    /// `Foodgram` constructor.
    ///
    /// # Errors
    ///
    /// Will return a `databases::error::Error` if unable to connect to the
    /// database or to create its tables.
    pub fn new(config: &Core) -> Result<Foodgram, databases::error::Error> {
        let database = Arc::new(databases::driver::build(&config.database.driver, &config.database.path)?);

        debug!(driver = %config.database.driver, "database ready");

        Ok(Foodgram {
            database,
            media: media::Storage::new(&config.media),
            pagination: config.pagination,
            shopping_list_font: config.shopping_list.font_path.clone(),
        })
    }

    #[must_use]
    pub fn pagination_policy(&self) -> &PaginationPolicy {
        &self.pagination
    }

    #[must_use]
    pub fn media(&self) -> &media::Storage {
        &self.media
    }

    /// It drops the database tables.
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to drop tables.
    pub fn drop_database_tables(&self) -> Result<(), databases::error::Error> {
        self.database.drop_database_tables()
    }
}
