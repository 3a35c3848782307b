//! The persistence module.
//!
//! Persistence is implemented with one [`Database`] trait.
//!
//! There are two implementations of the trait (two drivers):
//!
//! - [`Mysql`](crate::core::databases::mysql::Mysql)
//! - [`Sqlite`](crate::core::databases::sqlite::Sqlite)
//!
//! > **NOTICE**: There are no database migrations. The tables are created
//! when the driver is built if they do not exist yet.
//!
//! The persistent objects are:
//!
//! - [Users](#users)
//! - [Tokens](#tokens)
//! - [Subscriptions](#subscriptions)
//! - [Tags and ingredients](#tags-and-ingredients)
//! - [Recipes](#recipes)
//! - [Favorites and shopping cart](#favorites-and-shopping-cart)
//!
//! # Users
//!
//! Field           | Sample data                          | Description
//! ---|---|---
//! `id`            | 1                                    | Autoincrement id
//! `email`         | `vpupkin@yandex.ru`                  | Unique, domain stored lowercase
//! `username`      | `vasya.pupkin`                       | Unique
//! `first_name`    | `Вася`                               |
//! `last_name`     | `Пупкин`                             |
//! `password`      | `pbkdf2_sha256$600000$Zq3...$VawE...` | See [`auth`](crate::core::auth)
//!
//! # Tokens
//!
//! Field     | Sample data                                | Description
//! ---|---|---
//! `token`   | `0CXRnXp8zMrTMi6xrzQjzWx5dB1RRf5ZgsDcVxZd` | Primary key
//! `user_id` | 1                                          | Unique, one token per user
//! `created` | 1672419840                                 | Timestamp
//!
//! # Subscriptions
//!
//! A row means `user_id` follows the recipes of `author_id`. The pair is
//! unique.
//!
//! # Tags and ingredients
//!
//! Tags have unique `name`, `color` and `slug`. Ingredients have a unique
//! `name` and `measurement_unit` pair. Ingredients also keep a lowercased
//! `search_name`, used by the prefix search.
//!
//! # Recipes
//!
//! Field          | Sample data                         | Description
//! ---|---|---
//! `id`           | 1                                   | Autoincrement id
//! `author_id`    | 1                                   | The user who published it
//! `name`         | `Борщ`                              |
//! `text`         | `Варить два часа`                   |
//! `cooking_time` | 120                                 | Minutes
//! `image`        | `recipes/images/3f2c...png`         | Relative to the media root
//! `pub_date`     | 1672419840                          | Timestamp
//!
//! The tags of a recipe are stored in `recipe_tags` and the ingredients with
//! their amounts in `recipe_ingredients`.
//!
//! # Favorites and shopping cart
//!
//! Both are `(user_id, recipe_id)` unique pairs, stored in the `favorites`
//! and `shopping_cart` tables.
//!
//! All the references cascade on delete.
pub mod driver;
pub mod error;
pub mod mysql;
pub mod sqlite;

use std::marker::PhantomData;

use foodgram_primitives::pagination::Pagination;
use foodgram_primitives::{IngredientId, RecipeId, TagId, UserId};

use self::error::Error;
use crate::core::auth::Token;
use crate::core::catalog::{Ingredient, NewIngredient, NewTag, Tag};
use crate::core::recipes::{Collection, NewRecipe, Recipe, RecipeFilter, RecipeIngredient};
use crate::core::shopping_list::ShoppingListItem;
use crate::core::users::{NewUser, User};

struct Builder<T>
where
    T: Database,
{
    phantom: PhantomData<T>,
}

impl<T> Builder<T>
where
    T: Database + 'static,
{
    /// .
    ///
    /// # Errors
    ///
    /// Will return `r2d2::Error` if `db_path` is not able to create a database.
    pub(self) fn build(db_path: &str) -> Result<Box<dyn Database>, Error> {
        Ok(Box::new(T::new(db_path)?))
    }
}

/// The persistence trait. It contains all the methods to interact with the database.
pub trait Database: Sync + Send {
    /// It instantiates a new database driver.
    ///
    /// # Errors
    ///
    /// Will return `r2d2::Error` if `db_path` is not able to create a database.
    fn new(db_path: &str) -> Result<Self, Error>
    where
        Self: std::marker::Sized;

    // Schema

    /// It generates the database tables. SQL queries are hardcoded in the trait
    /// implementation.
    ///
    /// # Context: Schema
    ///
    /// # Errors
    ///
    /// Will return `Error` if unable to create own tables.
    fn create_database_tables(&self) -> Result<(), Error>;

    /// It drops the database tables.
    ///
    /// # Context: Schema
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to drop tables.
    fn drop_database_tables(&self) -> Result<(), Error>;

    // Users

    /// # Context: Users
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to insert, for example when the email or
    /// the username are already taken.
    fn add_user(&self, user: &NewUser) -> Result<UserId, Error>;

    /// # Context: Users
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    fn get_user(&self, user_id: UserId) -> Result<Option<User>, Error>;

    /// # Context: Users
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    fn get_user_by_email(&self, email: &str) -> Result<Option<User>, Error>;

    /// # Context: Users
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    fn get_user_by_username(&self, username: &str) -> Result<Option<User>, Error>;

    /// It loads a page of users ordered by id.
    ///
    /// # Context: Users
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    fn load_users(&self, pagination: &Pagination) -> Result<Vec<User>, Error>;

    /// # Context: Users
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to count.
    fn count_users(&self) -> Result<u64, Error>;

    /// # Context: Users
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to update.
    fn update_user_password(&self, user_id: UserId, password_hash: &str) -> Result<(), Error>;

    /// It removes a user and, by cascade, everything the user owns. It
    /// returns the number of removed users.
    ///
    /// # Context: Users
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to delete.
    fn remove_user(&self, user_id: UserId) -> Result<usize, Error>;

    // Tokens

    /// # Context: Tokens
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    fn get_token_for_user(&self, user_id: UserId) -> Result<Option<Token>, Error>;

    /// # Context: Tokens
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to insert.
    fn add_token(&self, token: &Token, user_id: UserId) -> Result<(), Error>;

    /// # Context: Tokens
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    fn get_user_by_token(&self, token: &Token) -> Result<Option<User>, Error>;

    /// # Context: Tokens
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to delete.
    fn remove_tokens_for_user(&self, user_id: UserId) -> Result<usize, Error>;

    // Subscriptions

    /// # Context: Subscriptions
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to insert.
    fn add_subscription(&self, user_id: UserId, author_id: UserId) -> Result<(), Error>;

    /// It returns the number of removed subscriptions.
    ///
    /// # Context: Subscriptions
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to delete.
    fn remove_subscription(&self, user_id: UserId, author_id: UserId) -> Result<usize, Error>;

    /// # Context: Subscriptions
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    fn is_subscribed(&self, user_id: UserId, author_id: UserId) -> Result<bool, Error>;

    /// It loads a page of the authors the user is subscribed to, ordered by
    /// author id.
    ///
    /// # Context: Subscriptions
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    fn load_subscribed_authors(&self, user_id: UserId, pagination: &Pagination) -> Result<Vec<User>, Error>;

    /// # Context: Subscriptions
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to count.
    fn count_subscribed_authors(&self, user_id: UserId) -> Result<u64, Error>;

    // Tags

    /// It loads all the tags ordered by id.
    ///
    /// # Context: Tags
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    fn load_tags(&self) -> Result<Vec<Tag>, Error>;

    /// It loads the tags that already use the `name`, the `color` (ignoring
    /// case) or the `slug`.
    ///
    /// # Context: Tags
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    fn load_conflicting_tags(&self, name: &str, color: &str, slug: &str) -> Result<Vec<Tag>, Error>;

    /// # Context: Tags
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    fn get_tag(&self, tag_id: TagId) -> Result<Option<Tag>, Error>;

    /// # Context: Tags
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to insert.
    fn add_tag(&self, tag: &NewTag) -> Result<TagId, Error>;

    /// # Context: Tags
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to delete.
    fn remove_tag(&self, tag_id: TagId) -> Result<usize, Error>;

    // Ingredients

    /// It loads all the ingredients ordered by name.
    ///
    /// # Context: Ingredients
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    fn load_ingredients(&self) -> Result<Vec<Ingredient>, Error>;

    /// It loads the ingredients whose name starts with `prefix`, ignoring
    /// case, ordered by name.
    ///
    /// # Context: Ingredients
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    fn load_ingredients_by_name_prefix(&self, prefix: &str) -> Result<Vec<Ingredient>, Error>;

    /// # Context: Ingredients
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    fn get_ingredient(&self, ingredient_id: IngredientId) -> Result<Option<Ingredient>, Error>;

    /// # Context: Ingredients
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to insert.
    fn add_ingredient(&self, ingredient: &NewIngredient) -> Result<IngredientId, Error>;

    /// # Context: Ingredients
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to delete.
    fn remove_ingredient(&self, ingredient_id: IngredientId) -> Result<usize, Error>;

    // Recipes

    /// It inserts a recipe with its tags and ingredients in one transaction.
    ///
    /// # Context: Recipes
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to insert.
    fn add_recipe(&self, author_id: UserId, recipe: &NewRecipe, pub_date: i64) -> Result<RecipeId, Error>;

    /// It replaces the fields, tags and ingredients of a recipe in one
    /// transaction.
    ///
    /// # Context: Recipes
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to update.
    fn update_recipe(&self, recipe_id: RecipeId, recipe: &NewRecipe) -> Result<(), Error>;

    /// # Context: Recipes
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to delete.
    fn remove_recipe(&self, recipe_id: RecipeId) -> Result<usize, Error>;

    /// # Context: Recipes
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    fn get_recipe(&self, recipe_id: RecipeId) -> Result<Option<Recipe>, Error>;

    /// It loads a page of the recipes matching the filter, newest first.
    ///
    /// # Context: Recipes
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    fn load_recipes(&self, filter: &RecipeFilter, pagination: &Pagination) -> Result<Vec<Recipe>, Error>;

    /// # Context: Recipes
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to count.
    fn count_recipes(&self, filter: &RecipeFilter) -> Result<u64, Error>;

    /// # Context: Recipes
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    fn load_recipe_tags(&self, recipe_id: RecipeId) -> Result<Vec<Tag>, Error>;

    /// # Context: Recipes
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    fn load_recipe_ingredients(&self, recipe_id: RecipeId) -> Result<Vec<RecipeIngredient>, Error>;

    // Favorites and shopping cart

    /// It returns `0` if the recipe was already in the collection.
    ///
    /// # Context: Collections
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to insert.
    fn add_to_collection(&self, collection: Collection, user_id: UserId, recipe_id: RecipeId) -> Result<usize, Error>;

    /// It returns `0` if the recipe was not in the collection.
    ///
    /// # Context: Collections
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to delete.
    fn remove_from_collection(&self, collection: Collection, user_id: UserId, recipe_id: RecipeId) -> Result<usize, Error>;

    /// # Context: Collections
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    fn is_in_collection(&self, collection: Collection, user_id: UserId, recipe_id: RecipeId) -> Result<bool, Error>;

    /// # Context: Collections
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to count.
    fn count_collection_entries(&self, collection: Collection, recipe_id: RecipeId) -> Result<u64, Error>;

    /// It sums the ingredients of every recipe in the user's shopping cart,
    /// grouped by ingredient and unit, ordered by name.
    ///
    /// # Context: Collections
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    fn load_shopping_list(&self, user_id: UserId) -> Result<Vec<ShoppingListItem>, Error>;
}

/// A positional query parameter shared by both drivers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SqlParam {
    Int(i64),
    Text(String),
}

/// The lowercased form of a name kept next to it for case insensitive
/// searches. `SQLite` only folds ASCII letters on its own.
#[must_use]
pub fn search_name(name: &str) -> String {
    name.to_lowercase()
}

/// It builds a `LIKE` pattern matching the names that start with `prefix`.
/// The backslash is the escape character.
#[must_use]
pub fn like_prefix(prefix: &str) -> String {
    let mut pattern = String::with_capacity(prefix.len() + 1);

    for c in search_name(prefix).chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }

    pattern.push('%');
    pattern
}

/// It builds the `WHERE` clause for a recipe listing. Both drivers use `?`
/// placeholders, so the clause is shared.
pub(crate) fn recipe_filter_clause(filter: &RecipeFilter) -> (String, Vec<SqlParam>) {
    let mut conditions = Vec::new();
    let mut params = Vec::new();

    if let Some(author_id) = filter.author {
        conditions.push("r.author_id = ?".to_string());
        params.push(SqlParam::Int(author_id));
    }

    if !filter.tags.is_empty() {
        let placeholders = vec!["?"; filter.tags.len()].join(", ");
        conditions.push(format!(
            "r.id IN (SELECT rt.recipe_id FROM recipe_tags rt JOIN tags t ON t.id = rt.tag_id WHERE t.slug IN ({placeholders}))"
        ));
        params.extend(filter.tags.iter().cloned().map(SqlParam::Text));
    }

    for (collection, membership) in [
        (Collection::Favorites, filter.favorites),
        (Collection::ShoppingCart, filter.shopping_cart),
    ] {
        if let Some(membership) = membership {
            let operator = if membership.included { "IN" } else { "NOT IN" };
            conditions.push(format!(
                "r.id {operator} (SELECT c.recipe_id FROM {} c WHERE c.user_id = ?)",
                collection.table()
            ));
            params.push(SqlParam::Int(membership.user_id));
        }
    }

    if conditions.is_empty() {
        (String::new(), params)
    } else {
        (format!("WHERE {}", conditions.join(" AND ")), params)
    }
}
