//! The `MySQL` database driver.
use std::str::FromStr;

use chrono::Utc;
use foodgram_primitives::pagination::Pagination;
use foodgram_primitives::{DatabaseDriver, IngredientId, RecipeId, TagId, UserId};
use r2d2::Pool;
use r2d2_mysql::mysql::prelude::Queryable;
use r2d2_mysql::mysql::{params, Opts, OptsBuilder, Params, TxOpts, Value};
use r2d2_mysql::MySqlConnectionManager;

use super::{like_prefix, recipe_filter_clause, search_name, Database, Error, SqlParam};
use crate::core::auth::Token;
use crate::core::catalog::{Ingredient, NewIngredient, NewTag, Tag};
use crate::core::recipes::{Collection, NewRecipe, Recipe, RecipeFilter, RecipeIngredient};
use crate::core::shopping_list::ShoppingListItem;
use crate::core::users::{NewUser, User};

const DRIVER: DatabaseDriver = DatabaseDriver::MySQL;

const USER_COLUMNS: &str = "u.id, u.email, u.username, u.first_name, u.last_name, u.password";
const RECIPE_COLUMNS: &str = "r.id, r.author_id, r.name, r.text, r.cooking_time, r.image, r.pub_date";

type UserRow = (i64, String, String, String, String, String);
type RecipeRow = (i64, i64, String, String, u32, String, i64);

/// Tables in creation order. They are dropped in reverse order.
const TABLES: [(&str, &str); 10] = [
    (
        "users",
        "CREATE TABLE IF NOT EXISTS `users` (
            `id` BIGINT NOT NULL AUTO_INCREMENT,
            `email` VARCHAR(254) CHARACTER SET utf8mb4 COLLATE utf8mb4_bin NOT NULL,
            `username` VARCHAR(150) NOT NULL,
            `first_name` VARCHAR(150) NOT NULL,
            `last_name` VARCHAR(150) NOT NULL,
            `password` VARCHAR(255) NOT NULL,
            PRIMARY KEY (`id`),
            UNIQUE (`email`),
            UNIQUE (`username`)
        );",
    ),
    (
        "tokens",
        "CREATE TABLE IF NOT EXISTS `tokens` (
            `token` VARCHAR(40) NOT NULL,
            `user_id` BIGINT NOT NULL,
            `created` BIGINT NOT NULL,
            PRIMARY KEY (`token`),
            UNIQUE (`user_id`),
            FOREIGN KEY (`user_id`) REFERENCES `users` (`id`) ON DELETE CASCADE
        );",
    ),
    (
        "subscriptions",
        "CREATE TABLE IF NOT EXISTS `subscriptions` (
            `id` BIGINT NOT NULL AUTO_INCREMENT,
            `user_id` BIGINT NOT NULL,
            `author_id` BIGINT NOT NULL,
            PRIMARY KEY (`id`),
            UNIQUE (`user_id`, `author_id`),
            FOREIGN KEY (`user_id`) REFERENCES `users` (`id`) ON DELETE CASCADE,
            FOREIGN KEY (`author_id`) REFERENCES `users` (`id`) ON DELETE CASCADE
        );",
    ),
    (
        "tags",
        "CREATE TABLE IF NOT EXISTS `tags` (
            `id` BIGINT NOT NULL AUTO_INCREMENT,
            `name` VARCHAR(200) NOT NULL,
            `color` VARCHAR(7) NOT NULL,
            `slug` VARCHAR(200) NOT NULL,
            PRIMARY KEY (`id`),
            UNIQUE (`name`),
            UNIQUE (`color`),
            UNIQUE (`slug`)
        );",
    ),
    (
        "ingredients",
        "CREATE TABLE IF NOT EXISTS `ingredients` (
            `id` BIGINT NOT NULL AUTO_INCREMENT,
            `name` VARCHAR(200) NOT NULL,
            `measurement_unit` VARCHAR(200) NOT NULL,
            `search_name` VARCHAR(200) NOT NULL,
            PRIMARY KEY (`id`),
            UNIQUE (`name`, `measurement_unit`),
            INDEX (`search_name`)
        );",
    ),
    (
        "recipes",
        "CREATE TABLE IF NOT EXISTS `recipes` (
            `id` BIGINT NOT NULL AUTO_INCREMENT,
            `author_id` BIGINT NOT NULL,
            `name` VARCHAR(200) NOT NULL,
            `text` TEXT NOT NULL,
            `cooking_time` INT UNSIGNED NOT NULL,
            `image` VARCHAR(255) NOT NULL,
            `pub_date` BIGINT NOT NULL,
            PRIMARY KEY (`id`),
            FOREIGN KEY (`author_id`) REFERENCES `users` (`id`) ON DELETE CASCADE
        );",
    ),
    (
        "recipe_tags",
        "CREATE TABLE IF NOT EXISTS `recipe_tags` (
            `id` BIGINT NOT NULL AUTO_INCREMENT,
            `recipe_id` BIGINT NOT NULL,
            `tag_id` BIGINT NOT NULL,
            PRIMARY KEY (`id`),
            UNIQUE (`recipe_id`, `tag_id`),
            FOREIGN KEY (`recipe_id`) REFERENCES `recipes` (`id`) ON DELETE CASCADE,
            FOREIGN KEY (`tag_id`) REFERENCES `tags` (`id`) ON DELETE CASCADE
        );",
    ),
    (
        "recipe_ingredients",
        "CREATE TABLE IF NOT EXISTS `recipe_ingredients` (
            `id` BIGINT NOT NULL AUTO_INCREMENT,
            `recipe_id` BIGINT NOT NULL,
            `ingredient_id` BIGINT NOT NULL,
            `amount` INT UNSIGNED NOT NULL,
            PRIMARY KEY (`id`),
            UNIQUE (`recipe_id`, `ingredient_id`),
            FOREIGN KEY (`recipe_id`) REFERENCES `recipes` (`id`) ON DELETE CASCADE,
            FOREIGN KEY (`ingredient_id`) REFERENCES `ingredients` (`id`) ON DELETE CASCADE
        );",
    ),
    (
        "favorites",
        "CREATE TABLE IF NOT EXISTS `favorites` (
            `id` BIGINT NOT NULL AUTO_INCREMENT,
            `user_id` BIGINT NOT NULL,
            `recipe_id` BIGINT NOT NULL,
            PRIMARY KEY (`id`),
            UNIQUE (`user_id`, `recipe_id`),
            FOREIGN KEY (`user_id`) REFERENCES `users` (`id`) ON DELETE CASCADE,
            FOREIGN KEY (`recipe_id`) REFERENCES `recipes` (`id`) ON DELETE CASCADE
        );",
    ),
    (
        "shopping_cart",
        "CREATE TABLE IF NOT EXISTS `shopping_cart` (
            `id` BIGINT NOT NULL AUTO_INCREMENT,
            `user_id` BIGINT NOT NULL,
            `recipe_id` BIGINT NOT NULL,
            PRIMARY KEY (`id`),
            UNIQUE (`user_id`, `recipe_id`),
            FOREIGN KEY (`user_id`) REFERENCES `users` (`id`) ON DELETE CASCADE,
            FOREIGN KEY (`recipe_id`) REFERENCES `recipes` (`id`) ON DELETE CASCADE
        );",
    ),
];

pub struct Mysql {
    pool: Pool<MySqlConnectionManager>,
}

impl Database for Mysql {
    /// It instantiates a new `MySQL` database driver.
    ///
    /// Refer to [`databases::Database::new`](crate::core::databases::Database::new).
    ///
    /// # Errors
    ///
    /// Will return `r2d2::Error` if `db_path` is not able to create `MySQL` database.
    fn new(db_path: &str) -> Result<Self, Error> {
        let opts = Opts::from_url(db_path)?;
        let builder = OptsBuilder::from_opts(opts);
        let manager = MySqlConnectionManager::new(builder);
        let pool = r2d2::Pool::builder().build(manager).map_err(|e| (e, DRIVER))?;

        Ok(Self { pool })
    }

    /// Refer to [`databases::Database::create_database_tables`](crate::core::databases::Database::create_database_tables).
    fn create_database_tables(&self) -> Result<(), Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        for (_, create_table) in TABLES {
            conn.query_drop(create_table)?;
        }

        Ok(())
    }

    /// Refer to [`databases::Database::drop_database_tables`](crate::core::databases::Database::drop_database_tables).
    fn drop_database_tables(&self) -> Result<(), Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        for (table, _) in TABLES.iter().rev() {
            conn.query_drop(format!("DROP TABLE `{table}`;"))?;
        }

        Ok(())
    }

    fn add_user(&self, user: &NewUser) -> Result<UserId, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.exec_drop(
            "INSERT INTO users (email, username, first_name, last_name, password) \
             VALUES (:email, :username, :first_name, :last_name, :password)",
            params! {
                "email" => &user.email,
                "username" => &user.username,
                "first_name" => &user.first_name,
                "last_name" => &user.last_name,
                "password" => &user.password_hash,
            },
        )?;

        last_insert_id(conn.last_insert_id())
    }

    fn get_user(&self, user_id: UserId) -> Result<Option<User>, Error> {
        self.find_user("u.id = :value", Value::from(user_id))
    }

    fn get_user_by_email(&self, email: &str) -> Result<Option<User>, Error> {
        self.find_user("u.email = :value", Value::from(email))
    }

    fn get_user_by_username(&self, username: &str) -> Result<Option<User>, Error> {
        self.find_user("u.username = :value", Value::from(username))
    }

    fn load_users(&self, pagination: &Pagination) -> Result<Vec<User>, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let users = conn.exec_map(
            format!("SELECT {USER_COLUMNS} FROM users u ORDER BY u.id LIMIT :limit OFFSET :offset"),
            params! { "limit" => pagination.limit, "offset" => pagination.offset },
            user_from_row,
        )?;

        Ok(users)
    }

    fn count_users(&self) -> Result<u64, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        Ok(conn.query_first::<u64, _>("SELECT COUNT(*) FROM users")?.unwrap_or_default())
    }

    fn update_user_password(&self, user_id: UserId, password_hash: &str) -> Result<(), Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.exec_drop(
            "UPDATE users SET password = :password WHERE id = :user_id",
            params! { "password" => password_hash, "user_id" => user_id },
        )?;

        Ok(())
    }

    fn remove_user(&self, user_id: UserId) -> Result<usize, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.exec_drop("DELETE FROM users WHERE id = :user_id", params! { "user_id" => user_id })?;

        Ok(affected_rows(conn.affected_rows()))
    }

    fn get_token_for_user(&self, user_id: UserId) -> Result<Option<Token>, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let token = conn.exec_first::<String, _, _>("SELECT token FROM tokens WHERE user_id = :user_id", params! { "user_id" => user_id })?;

        token
            .map(|token| Token::from_str(&token).map_err(|_| Error::invalid_value("tokens.token", DRIVER)))
            .transpose()
    }

    fn add_token(&self, token: &Token, user_id: UserId) -> Result<(), Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.exec_drop(
            "INSERT INTO tokens (token, user_id, created) VALUES (:token, :user_id, :created)",
            params! { "token" => token.as_str(), "user_id" => user_id, "created" => Utc::now().timestamp() },
        )?;

        Ok(())
    }

    fn get_user_by_token(&self, token: &Token) -> Result<Option<User>, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let user = conn.exec_first::<UserRow, _, _>(
            format!("SELECT {USER_COLUMNS} FROM users u JOIN tokens t ON t.user_id = u.id WHERE t.token = :token"),
            params! { "token" => token.as_str() },
        )?;

        Ok(user.map(user_from_row))
    }

    fn remove_tokens_for_user(&self, user_id: UserId) -> Result<usize, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.exec_drop("DELETE FROM tokens WHERE user_id = :user_id", params! { "user_id" => user_id })?;

        Ok(affected_rows(conn.affected_rows()))
    }

    fn add_subscription(&self, user_id: UserId, author_id: UserId) -> Result<(), Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.exec_drop(
            "INSERT INTO subscriptions (user_id, author_id) VALUES (:user_id, :author_id)",
            params! { "user_id" => user_id, "author_id" => author_id },
        )?;

        Ok(())
    }

    fn remove_subscription(&self, user_id: UserId, author_id: UserId) -> Result<usize, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.exec_drop(
            "DELETE FROM subscriptions WHERE user_id = :user_id AND author_id = :author_id",
            params! { "user_id" => user_id, "author_id" => author_id },
        )?;

        Ok(affected_rows(conn.affected_rows()))
    }

    fn is_subscribed(&self, user_id: UserId, author_id: UserId) -> Result<bool, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let exists = conn.exec_first::<bool, _, _>(
            "SELECT EXISTS (SELECT 1 FROM subscriptions WHERE user_id = :user_id AND author_id = :author_id)",
            params! { "user_id" => user_id, "author_id" => author_id },
        )?;

        Ok(exists.unwrap_or_default())
    }

    fn load_subscribed_authors(&self, user_id: UserId, pagination: &Pagination) -> Result<Vec<User>, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let authors = conn.exec_map(
            format!(
                "SELECT {USER_COLUMNS} FROM users u JOIN subscriptions s ON s.author_id = u.id \
                 WHERE s.user_id = :user_id ORDER BY u.id LIMIT :limit OFFSET :offset"
            ),
            params! { "user_id" => user_id, "limit" => pagination.limit, "offset" => pagination.offset },
            user_from_row,
        )?;

        Ok(authors)
    }

    fn count_subscribed_authors(&self, user_id: UserId) -> Result<u64, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let count = conn.exec_first::<u64, _, _>(
            "SELECT COUNT(*) FROM subscriptions WHERE user_id = :user_id",
            params! { "user_id" => user_id },
        )?;

        Ok(count.unwrap_or_default())
    }

    fn load_tags(&self) -> Result<Vec<Tag>, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let tags = conn.query_map("SELECT id, name, color, slug FROM tags ORDER BY id", tag_from_row)?;

        Ok(tags)
    }

    fn load_conflicting_tags(&self, name: &str, color: &str, slug: &str) -> Result<Vec<Tag>, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let tags = conn.exec_map(
            "SELECT id, name, color, slug FROM tags \
             WHERE name = :name OR UPPER(color) = UPPER(:color) OR slug = :slug ORDER BY id",
            params! { "name" => name, "color" => color, "slug" => slug },
            tag_from_row,
        )?;

        Ok(tags)
    }

    fn get_tag(&self, tag_id: TagId) -> Result<Option<Tag>, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let tag = conn.exec_first::<(i64, String, String, String), _, _>(
            "SELECT id, name, color, slug FROM tags WHERE id = :tag_id",
            params! { "tag_id" => tag_id },
        )?;

        Ok(tag.map(tag_from_row))
    }

    fn add_tag(&self, tag: &NewTag) -> Result<TagId, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.exec_drop(
            "INSERT INTO tags (name, color, slug) VALUES (:name, :color, :slug)",
            params! { "name" => &tag.name, "color" => &tag.color, "slug" => &tag.slug },
        )?;

        last_insert_id(conn.last_insert_id())
    }

    fn remove_tag(&self, tag_id: TagId) -> Result<usize, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.exec_drop("DELETE FROM tags WHERE id = :tag_id", params! { "tag_id" => tag_id })?;

        Ok(affected_rows(conn.affected_rows()))
    }

    fn load_ingredients(&self) -> Result<Vec<Ingredient>, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let ingredients = conn.query_map(
            "SELECT id, name, measurement_unit FROM ingredients ORDER BY name, id",
            ingredient_from_row,
        )?;

        Ok(ingredients)
    }

    fn load_ingredients_by_name_prefix(&self, prefix: &str) -> Result<Vec<Ingredient>, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let ingredients = conn.exec_map(
            "SELECT id, name, measurement_unit FROM ingredients WHERE search_name LIKE :pattern ORDER BY name, id",
            params! { "pattern" => like_prefix(prefix) },
            ingredient_from_row,
        )?;

        Ok(ingredients)
    }

    fn get_ingredient(&self, ingredient_id: IngredientId) -> Result<Option<Ingredient>, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let ingredient = conn.exec_first::<(i64, String, String), _, _>(
            "SELECT id, name, measurement_unit FROM ingredients WHERE id = :ingredient_id",
            params! { "ingredient_id" => ingredient_id },
        )?;

        Ok(ingredient.map(ingredient_from_row))
    }

    fn add_ingredient(&self, ingredient: &NewIngredient) -> Result<IngredientId, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.exec_drop(
            "INSERT INTO ingredients (name, measurement_unit, search_name) VALUES (:name, :measurement_unit, :search_name)",
            params! {
                "name" => &ingredient.name,
                "measurement_unit" => &ingredient.measurement_unit,
                "search_name" => search_name(&ingredient.name),
            },
        )?;

        last_insert_id(conn.last_insert_id())
    }

    fn remove_ingredient(&self, ingredient_id: IngredientId) -> Result<usize, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.exec_drop("DELETE FROM ingredients WHERE id = :ingredient_id", params! { "ingredient_id" => ingredient_id })?;

        Ok(affected_rows(conn.affected_rows()))
    }

    fn add_recipe(&self, author_id: UserId, recipe: &NewRecipe, pub_date: i64) -> Result<RecipeId, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let mut tx = conn.start_transaction(TxOpts::default())?;

        tx.exec_drop(
            "INSERT INTO recipes (author_id, name, text, cooking_time, image, pub_date) \
             VALUES (:author_id, :name, :text, :cooking_time, :image, :pub_date)",
            params! {
                "author_id" => author_id,
                "name" => &recipe.name,
                "text" => &recipe.text,
                "cooking_time" => recipe.cooking_time,
                "image" => &recipe.image,
                "pub_date" => pub_date,
            },
        )?;

        let recipe_id = last_insert_id(tx.last_insert_id().unwrap_or_default())?;

        insert_recipe_relations(&mut tx, recipe_id, recipe)?;

        tx.commit()?;

        Ok(recipe_id)
    }

    fn update_recipe(&self, recipe_id: RecipeId, recipe: &NewRecipe) -> Result<(), Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let mut tx = conn.start_transaction(TxOpts::default())?;

        tx.exec_drop(
            "UPDATE recipes SET name = :name, text = :text, cooking_time = :cooking_time, image = :image \
             WHERE id = :recipe_id",
            params! {
                "name" => &recipe.name,
                "text" => &recipe.text,
                "cooking_time" => recipe.cooking_time,
                "image" => &recipe.image,
                "recipe_id" => recipe_id,
            },
        )?;

        tx.exec_drop("DELETE FROM recipe_tags WHERE recipe_id = :recipe_id", params! { "recipe_id" => recipe_id })?;
        tx.exec_drop("DELETE FROM recipe_ingredients WHERE recipe_id = :recipe_id", params! { "recipe_id" => recipe_id })?;

        insert_recipe_relations(&mut tx, recipe_id, recipe)?;

        tx.commit()?;

        Ok(())
    }

    fn remove_recipe(&self, recipe_id: RecipeId) -> Result<usize, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.exec_drop("DELETE FROM recipes WHERE id = :recipe_id", params! { "recipe_id" => recipe_id })?;

        Ok(affected_rows(conn.affected_rows()))
    }

    fn get_recipe(&self, recipe_id: RecipeId) -> Result<Option<Recipe>, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let recipe = conn.exec_first::<RecipeRow, _, _>(
            format!("SELECT {RECIPE_COLUMNS} FROM recipes r WHERE r.id = :recipe_id"),
            params! { "recipe_id" => recipe_id },
        )?;

        Ok(recipe.map(recipe_from_row))
    }

    fn load_recipes(&self, filter: &RecipeFilter, pagination: &Pagination) -> Result<Vec<Recipe>, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let (clause, params) = recipe_filter_clause(filter);

        let mut values = to_values(params);
        values.push(Value::from(pagination.limit));
        values.push(Value::from(pagination.offset));

        let recipes = conn.exec_map(
            format!("SELECT {RECIPE_COLUMNS} FROM recipes r {clause} ORDER BY r.pub_date DESC, r.id DESC LIMIT ? OFFSET ?"),
            Params::Positional(values),
            recipe_from_row,
        )?;

        Ok(recipes)
    }

    fn count_recipes(&self, filter: &RecipeFilter) -> Result<u64, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let (clause, params) = recipe_filter_clause(filter);

        let count = conn.exec_first::<u64, _, _>(
            format!("SELECT COUNT(*) FROM recipes r {clause}"),
            positional(to_values(params)),
        )?;

        Ok(count.unwrap_or_default())
    }

    fn load_recipe_tags(&self, recipe_id: RecipeId) -> Result<Vec<Tag>, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let tags = conn.exec_map(
            "SELECT t.id, t.name, t.color, t.slug FROM tags t JOIN recipe_tags rt ON rt.tag_id = t.id \
             WHERE rt.recipe_id = :recipe_id ORDER BY t.id",
            params! { "recipe_id" => recipe_id },
            tag_from_row,
        )?;

        Ok(tags)
    }

    fn load_recipe_ingredients(&self, recipe_id: RecipeId) -> Result<Vec<RecipeIngredient>, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let ingredients = conn.exec_map(
            "SELECT i.id, i.name, i.measurement_unit, ri.amount FROM recipe_ingredients ri \
             JOIN ingredients i ON i.id = ri.ingredient_id WHERE ri.recipe_id = :recipe_id ORDER BY ri.id",
            params! { "recipe_id" => recipe_id },
            |(id, name, measurement_unit, amount): (i64, String, String, u32)| RecipeIngredient {
                id,
                name,
                measurement_unit,
                amount,
            },
        )?;

        Ok(ingredients)
    }

    fn add_to_collection(&self, collection: Collection, user_id: UserId, recipe_id: RecipeId) -> Result<usize, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.exec_drop(
            format!(
                "INSERT IGNORE INTO {} (user_id, recipe_id) VALUES (:user_id, :recipe_id)",
                collection.table()
            ),
            params! { "user_id" => user_id, "recipe_id" => recipe_id },
        )?;

        Ok(affected_rows(conn.affected_rows()))
    }

    fn remove_from_collection(&self, collection: Collection, user_id: UserId, recipe_id: RecipeId) -> Result<usize, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.exec_drop(
            format!(
                "DELETE FROM {} WHERE user_id = :user_id AND recipe_id = :recipe_id",
                collection.table()
            ),
            params! { "user_id" => user_id, "recipe_id" => recipe_id },
        )?;

        Ok(affected_rows(conn.affected_rows()))
    }

    fn is_in_collection(&self, collection: Collection, user_id: UserId, recipe_id: RecipeId) -> Result<bool, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let exists = conn.exec_first::<bool, _, _>(
            format!(
                "SELECT EXISTS (SELECT 1 FROM {} WHERE user_id = :user_id AND recipe_id = :recipe_id)",
                collection.table()
            ),
            params! { "user_id" => user_id, "recipe_id" => recipe_id },
        )?;

        Ok(exists.unwrap_or_default())
    }

    fn count_collection_entries(&self, collection: Collection, recipe_id: RecipeId) -> Result<u64, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let count = conn.exec_first::<u64, _, _>(
            format!("SELECT COUNT(*) FROM {} WHERE recipe_id = :recipe_id", collection.table()),
            params! { "recipe_id" => recipe_id },
        )?;

        Ok(count.unwrap_or_default())
    }

    fn load_shopping_list(&self, user_id: UserId) -> Result<Vec<ShoppingListItem>, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let items = conn.exec_map(
            "SELECT i.name, i.measurement_unit, CAST(SUM(ri.amount) AS UNSIGNED) FROM shopping_cart sc \
             JOIN recipe_ingredients ri ON ri.recipe_id = sc.recipe_id \
             JOIN ingredients i ON i.id = ri.ingredient_id \
             WHERE sc.user_id = :user_id \
             GROUP BY i.id, i.name, i.measurement_unit \
             ORDER BY i.name, i.measurement_unit",
            params! { "user_id" => user_id },
            |(name, measurement_unit, amount): (String, String, u64)| ShoppingListItem {
                name,
                measurement_unit,
                amount,
            },
        )?;

        Ok(items)
    }
}

impl Mysql {
    fn find_user(&self, condition: &str, value: Value) -> Result<Option<User>, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let user = conn.exec_first::<UserRow, _, _>(
            format!("SELECT {USER_COLUMNS} FROM users u WHERE {condition}"),
            params! { "value" => value },
        )?;

        Ok(user.map(user_from_row))
    }
}

fn insert_recipe_relations(tx: &mut impl Queryable, recipe_id: RecipeId, recipe: &NewRecipe) -> Result<(), Error> {
    tx.exec_batch(
        "INSERT INTO recipe_tags (recipe_id, tag_id) VALUES (:recipe_id, :tag_id)",
        recipe.tags.iter().map(|tag_id| params! { "recipe_id" => recipe_id, "tag_id" => *tag_id }),
    )?;

    tx.exec_batch(
        "INSERT INTO recipe_ingredients (recipe_id, ingredient_id, amount) VALUES (:recipe_id, :ingredient_id, :amount)",
        recipe.ingredients.iter().map(|ingredient| {
            params! {
                "recipe_id" => recipe_id,
                "ingredient_id" => ingredient.ingredient_id,
                "amount" => ingredient.amount,
            }
        }),
    )?;

    Ok(())
}

fn user_from_row((id, email, username, first_name, last_name, password_hash): UserRow) -> User {
    User {
        id,
        email,
        username,
        first_name,
        last_name,
        password_hash,
    }
}

fn tag_from_row((id, name, color, slug): (i64, String, String, String)) -> Tag {
    Tag { id, name, color, slug }
}

fn ingredient_from_row((id, name, measurement_unit): (i64, String, String)) -> Ingredient {
    Ingredient {
        id,
        name,
        measurement_unit,
    }
}

fn recipe_from_row((id, author_id, name, text, cooking_time, image, pub_date): RecipeRow) -> Recipe {
    Recipe {
        id,
        author_id,
        name,
        text,
        cooking_time,
        image,
        pub_date,
    }
}

fn to_values(params: Vec<SqlParam>) -> Vec<Value> {
    params
        .into_iter()
        .map(|param| match param {
            SqlParam::Int(value) => Value::from(value),
            SqlParam::Text(value) => Value::from(value),
        })
        .collect()
}

fn positional(values: Vec<Value>) -> Params {
    if values.is_empty() {
        Params::Empty
    } else {
        Params::Positional(values)
    }
}

fn last_insert_id(id: u64) -> Result<i64, Error> {
    i64::try_from(id)
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| Error::insert_failed(DRIVER))
}

fn affected_rows(rows: u64) -> usize {
    usize::try_from(rows).unwrap_or(usize::MAX)
}
