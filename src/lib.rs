//! **Foodgram** is a recipe sharing REST backend.
//!
//! Users publish recipes with ingredients, tags and an image. Other users can
//! add the recipes to their favorites, subscribe to the authors, and put
//! recipes in a shopping cart that can be downloaded as a shopping list in
//! PDF format, with the amounts of the same ingredient added up.
//!
//! # Table of contents
//!
//! - [Features](#features)
//! - [Services](#services)
//! - [Installation](#installation)
//! - [Configuration](#configuration)
//! - [Components](#components)
//!
//! # Features
//!
//! - Registration and token authentication.
//! - Recipes with tags, ingredients and images.
//! - Favorites and shopping cart.
//! - Subscriptions to authors.
//! - Shopping list download in PDF format.
//! - Administration API for the catalogs of tags and ingredients.
//! - `SQLite` and `MySQL` databases.
//!
//! # Services
//!
//! There is only one service, the [REST API](crate::servers::apis). It also
//! serves the uploaded images.
//!
//! # Installation
//!
//! ```text
//! git clone https://github.com/foodgram/foodgram.git \
//!   && cd foodgram \
//!   && cargo build --release \
//!   && mkdir -p ./storage/foodgram/lib/database \
//!   && mkdir -p ./storage/foodgram/media
//! ```
//!
//! Run it with the default configuration:
//!
//! ```text
//! ./target/release/foodgram
//! ```
//!
//! # Configuration
//!
//! The configuration is loaded from a TOML file. Refer to the
//! [`foodgram-configuration`](foodgram_configuration) package for the
//! available options and how to provide them.
//!
//! ```text
//! FOODGRAM_CONFIG_TOML_PATH=./share/default/config/foodgram.toml ./target/release/foodgram
//! ```
//!
//! # Components
//!
//! - [`core`]: the domain layer. Users, recipes, catalogs, collections, the
//!   shopping list and the persistence.
//! - [`servers`]: the REST API server.
//! - [`bootstrap`]: configuration, logging and jobs setup.
//! - [`app`]: it starts the jobs.
pub mod app;
pub mod bootstrap;
pub mod core;
pub mod servers;
