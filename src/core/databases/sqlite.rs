//! The `SQLite3` database driver.
use std::str::FromStr;

use chrono::Utc;
use foodgram_primitives::pagination::Pagination;
use foodgram_primitives::{DatabaseDriver, IngredientId, RecipeId, TagId, UserId};
use r2d2::Pool;
use r2d2_sqlite::rusqlite::types::Value;
use r2d2_sqlite::rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use r2d2_sqlite::SqliteConnectionManager;
use tracing::warn;

use super::{like_prefix, recipe_filter_clause, search_name, Database, Error, SqlParam};
use crate::core::auth::Token;
use crate::core::catalog::{Ingredient, NewIngredient, NewTag, Tag};
use crate::core::recipes::{Collection, NewRecipe, Recipe, RecipeFilter, RecipeIngredient};
use crate::core::shopping_list::ShoppingListItem;
use crate::core::users::{NewUser, User};

const DRIVER: DatabaseDriver = DatabaseDriver::Sqlite3;

const USER_COLUMNS: &str = "u.id, u.email, u.username, u.first_name, u.last_name, u.password";
const RECIPE_COLUMNS: &str = "r.id, r.author_id, r.name, r.text, r.cooking_time, r.image, r.pub_date";

/// Tables in creation order. They are dropped in reverse order.
const TABLES: [(&str, &str); 10] = [
    (
        "users",
        "CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            email TEXT NOT NULL UNIQUE,
            username TEXT NOT NULL UNIQUE,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            password TEXT NOT NULL
        );",
    ),
    (
        "tokens",
        "CREATE TABLE IF NOT EXISTS tokens (
            token TEXT PRIMARY KEY NOT NULL,
            user_id INTEGER NOT NULL UNIQUE REFERENCES users(id) ON DELETE CASCADE,
            created INTEGER NOT NULL
        );",
    ),
    (
        "subscriptions",
        "CREATE TABLE IF NOT EXISTS subscriptions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            author_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            UNIQUE (user_id, author_id)
        );",
    ),
    (
        "tags",
        "CREATE TABLE IF NOT EXISTS tags (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            color TEXT NOT NULL UNIQUE,
            slug TEXT NOT NULL UNIQUE
        );",
    ),
    (
        "ingredients",
        "CREATE TABLE IF NOT EXISTS ingredients (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            measurement_unit TEXT NOT NULL,
            search_name TEXT NOT NULL,
            UNIQUE (name, measurement_unit)
        );",
    ),
    (
        "recipes",
        "CREATE TABLE IF NOT EXISTS recipes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            author_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            name TEXT NOT NULL,
            text TEXT NOT NULL,
            cooking_time INTEGER NOT NULL,
            image TEXT NOT NULL,
            pub_date INTEGER NOT NULL
        );",
    ),
    (
        "recipe_tags",
        "CREATE TABLE IF NOT EXISTS recipe_tags (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            recipe_id INTEGER NOT NULL REFERENCES recipes(id) ON DELETE CASCADE,
            tag_id INTEGER NOT NULL REFERENCES tags(id) ON DELETE CASCADE,
            UNIQUE (recipe_id, tag_id)
        );",
    ),
    (
        "recipe_ingredients",
        "CREATE TABLE IF NOT EXISTS recipe_ingredients (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            recipe_id INTEGER NOT NULL REFERENCES recipes(id) ON DELETE CASCADE,
            ingredient_id INTEGER NOT NULL REFERENCES ingredients(id) ON DELETE CASCADE,
            amount INTEGER NOT NULL,
            UNIQUE (recipe_id, ingredient_id)
        );",
    ),
    (
        "favorites",
        "CREATE TABLE IF NOT EXISTS favorites (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            recipe_id INTEGER NOT NULL REFERENCES recipes(id) ON DELETE CASCADE,
            UNIQUE (user_id, recipe_id)
        );",
    ),
    (
        "shopping_cart",
        "CREATE TABLE IF NOT EXISTS shopping_cart (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            recipe_id INTEGER NOT NULL REFERENCES recipes(id) ON DELETE CASCADE,
            UNIQUE (user_id, recipe_id)
        );",
    ),
];

pub struct Sqlite {
    pool: Pool<SqliteConnectionManager>,
}

impl Database for Sqlite {
    /// It instantiates a new `SQLite3` database driver.
    ///
    /// Refer to [`databases::Database::new`](crate::core::databases::Database::new).
    ///
    /// # Errors
    ///
    /// Will return `r2d2::Error` if `db_path` is not able to create `SqLite` database.
    fn new(db_path: &str) -> Result<Sqlite, Error> {
        if let Some(parent) = std::path::Path::new(db_path).parent() {
            if let Err(err) = std::fs::create_dir_all(parent) {
                warn!(%db_path, %err, "unable to create the database directory");
            }
        }

        let cm = SqliteConnectionManager::file(db_path).with_init(|conn| conn.execute_batch("PRAGMA foreign_keys = ON;"));
        Pool::new(cm).map_or_else(|err| Err((err, DRIVER).into()), |pool| Ok(Sqlite { pool }))
    }

    /// Refer to [`databases::Database::create_database_tables`](crate::core::databases::Database::create_database_tables).
    fn create_database_tables(&self) -> Result<(), Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        for (_, create_table) in TABLES {
            conn.execute(create_table, [])?;
        }

        Ok(())
    }

    /// Refer to [`databases::Database::drop_database_tables`](crate::core::databases::Database::drop_database_tables).
    fn drop_database_tables(&self) -> Result<(), Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        for (table, _) in TABLES.iter().rev() {
            conn.execute(&format!("DROP TABLE {table};"), [])?;
        }

        Ok(())
    }

    fn add_user(&self, user: &NewUser) -> Result<UserId, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let insert = conn.execute(
            "INSERT INTO users (email, username, first_name, last_name, password) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![user.email, user.username, user.first_name, user.last_name, user.password_hash],
        )?;

        if insert == 0 {
            return Err(Error::insert_failed(DRIVER));
        }

        Ok(conn.last_insert_rowid())
    }

    fn get_user(&self, user_id: UserId) -> Result<Option<User>, Error> {
        self.find_user("u.id = ?1", &user_id)
    }

    fn get_user_by_email(&self, email: &str) -> Result<Option<User>, Error> {
        self.find_user("u.email = ?1", &email)
    }

    fn get_user_by_username(&self, username: &str) -> Result<Option<User>, Error> {
        self.find_user("u.username = ?1", &username)
    }

    fn load_users(&self, pagination: &Pagination) -> Result<Vec<User>, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let mut stmt = conn.prepare(&format!("SELECT {USER_COLUMNS} FROM users u ORDER BY u.id LIMIT ?1 OFFSET ?2"))?;

        let users = stmt
            .query_map(params![pagination.limit, pagination.offset], user_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(users)
    }

    fn count_users(&self) -> Result<u64, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let count: i64 = conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;

        to_count(count)
    }

    fn update_user_password(&self, user_id: UserId, password_hash: &str) -> Result<(), Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.execute("UPDATE users SET password = ?1 WHERE id = ?2", params![password_hash, user_id])?;

        Ok(())
    }

    fn remove_user(&self, user_id: UserId) -> Result<usize, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        Ok(conn.execute("DELETE FROM users WHERE id = ?1", [user_id])?)
    }

    fn get_token_for_user(&self, user_id: UserId) -> Result<Option<Token>, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let token: Option<String> = conn
            .query_row("SELECT token FROM tokens WHERE user_id = ?1", [user_id], |row| row.get(0))
            .optional()?;

        token
            .map(|token| Token::from_str(&token).map_err(|_| Error::invalid_value("tokens.token", DRIVER)))
            .transpose()
    }

    fn add_token(&self, token: &Token, user_id: UserId) -> Result<(), Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let insert = conn.execute(
            "INSERT INTO tokens (token, user_id, created) VALUES (?1, ?2, ?3)",
            params![token.as_str(), user_id, Utc::now().timestamp()],
        )?;

        if insert == 0 {
            Err(Error::insert_failed(DRIVER))
        } else {
            Ok(())
        }
    }

    fn get_user_by_token(&self, token: &Token) -> Result<Option<User>, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let user = conn
            .query_row(
                &format!("SELECT {USER_COLUMNS} FROM users u JOIN tokens t ON t.user_id = u.id WHERE t.token = ?1"),
                [token.as_str()],
                user_from_row,
            )
            .optional()?;

        Ok(user)
    }

    fn remove_tokens_for_user(&self, user_id: UserId) -> Result<usize, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        Ok(conn.execute("DELETE FROM tokens WHERE user_id = ?1", [user_id])?)
    }

    fn add_subscription(&self, user_id: UserId, author_id: UserId) -> Result<(), Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let insert = conn.execute(
            "INSERT INTO subscriptions (user_id, author_id) VALUES (?1, ?2)",
            [user_id, author_id],
        )?;

        if insert == 0 {
            Err(Error::insert_failed(DRIVER))
        } else {
            Ok(())
        }
    }

    fn remove_subscription(&self, user_id: UserId, author_id: UserId) -> Result<usize, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        Ok(conn.execute(
            "DELETE FROM subscriptions WHERE user_id = ?1 AND author_id = ?2",
            [user_id, author_id],
        )?)
    }

    fn is_subscribed(&self, user_id: UserId, author_id: UserId) -> Result<bool, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        Ok(conn.query_row(
            "SELECT EXISTS (SELECT 1 FROM subscriptions WHERE user_id = ?1 AND author_id = ?2)",
            [user_id, author_id],
            |row| row.get(0),
        )?)
    }

    fn load_subscribed_authors(&self, user_id: UserId, pagination: &Pagination) -> Result<Vec<User>, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let mut stmt = conn.prepare(&format!(
            "SELECT {USER_COLUMNS} FROM users u JOIN subscriptions s ON s.author_id = u.id \
             WHERE s.user_id = ?1 ORDER BY u.id LIMIT ?2 OFFSET ?3"
        ))?;

        let authors = stmt
            .query_map(params![user_id, pagination.limit, pagination.offset], user_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(authors)
    }

    fn count_subscribed_authors(&self, user_id: UserId) -> Result<u64, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let count: i64 = conn.query_row("SELECT COUNT(*) FROM subscriptions WHERE user_id = ?1", [user_id], |row| {
            row.get(0)
        })?;

        to_count(count)
    }

    fn load_tags(&self) -> Result<Vec<Tag>, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let mut stmt = conn.prepare("SELECT id, name, color, slug FROM tags ORDER BY id")?;

        let tags = stmt.query_map([], tag_from_row)?.collect::<Result<Vec<_>, _>>()?;

        Ok(tags)
    }

    fn load_conflicting_tags(&self, name: &str, color: &str, slug: &str) -> Result<Vec<Tag>, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let mut stmt = conn.prepare(
            "SELECT id, name, color, slug FROM tags WHERE name = ?1 OR UPPER(color) = UPPER(?2) OR slug = ?3 ORDER BY id",
        )?;

        let tags = stmt
            .query_map(params![name, color, slug], tag_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(tags)
    }

    fn get_tag(&self, tag_id: TagId) -> Result<Option<Tag>, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        Ok(conn
            .query_row("SELECT id, name, color, slug FROM tags WHERE id = ?1", [tag_id], tag_from_row)
            .optional()?)
    }

    fn add_tag(&self, tag: &NewTag) -> Result<TagId, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let insert = conn.execute(
            "INSERT INTO tags (name, color, slug) VALUES (?1, ?2, ?3)",
            params![tag.name, tag.color, tag.slug],
        )?;

        if insert == 0 {
            return Err(Error::insert_failed(DRIVER));
        }

        Ok(conn.last_insert_rowid())
    }

    fn remove_tag(&self, tag_id: TagId) -> Result<usize, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        Ok(conn.execute("DELETE FROM tags WHERE id = ?1", [tag_id])?)
    }

    fn load_ingredients(&self) -> Result<Vec<Ingredient>, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let mut stmt = conn.prepare("SELECT id, name, measurement_unit FROM ingredients ORDER BY name, id")?;

        let ingredients = stmt.query_map([], ingredient_from_row)?.collect::<Result<Vec<_>, _>>()?;

        Ok(ingredients)
    }

    fn load_ingredients_by_name_prefix(&self, prefix: &str) -> Result<Vec<Ingredient>, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let mut stmt = conn.prepare(
            "SELECT id, name, measurement_unit FROM ingredients WHERE search_name LIKE ?1 ESCAPE '\\' ORDER BY name, id",
        )?;

        let ingredients = stmt
            .query_map([like_prefix(prefix)], ingredient_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ingredients)
    }

    fn get_ingredient(&self, ingredient_id: IngredientId) -> Result<Option<Ingredient>, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        Ok(conn
            .query_row(
                "SELECT id, name, measurement_unit FROM ingredients WHERE id = ?1",
                [ingredient_id],
                ingredient_from_row,
            )
            .optional()?)
    }

    fn add_ingredient(&self, ingredient: &NewIngredient) -> Result<IngredientId, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let insert = conn.execute(
            "INSERT INTO ingredients (name, measurement_unit, search_name) VALUES (?1, ?2, ?3)",
            params![ingredient.name, ingredient.measurement_unit, search_name(&ingredient.name)],
        )?;

        if insert == 0 {
            return Err(Error::insert_failed(DRIVER));
        }

        Ok(conn.last_insert_rowid())
    }

    fn remove_ingredient(&self, ingredient_id: IngredientId) -> Result<usize, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        Ok(conn.execute("DELETE FROM ingredients WHERE id = ?1", [ingredient_id])?)
    }

    fn add_recipe(&self, author_id: UserId, recipe: &NewRecipe, pub_date: i64) -> Result<RecipeId, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let tx = conn.transaction()?;

        tx.execute(
            "INSERT INTO recipes (author_id, name, text, cooking_time, image, pub_date) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![author_id, recipe.name, recipe.text, recipe.cooking_time, recipe.image, pub_date],
        )?;

        let recipe_id = tx.last_insert_rowid();

        insert_recipe_relations(&tx, recipe_id, recipe)?;

        tx.commit()?;

        Ok(recipe_id)
    }

    fn update_recipe(&self, recipe_id: RecipeId, recipe: &NewRecipe) -> Result<(), Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let tx = conn.transaction()?;

        tx.execute(
            "UPDATE recipes SET name = ?1, text = ?2, cooking_time = ?3, image = ?4 WHERE id = ?5",
            params![recipe.name, recipe.text, recipe.cooking_time, recipe.image, recipe_id],
        )?;

        tx.execute("DELETE FROM recipe_tags WHERE recipe_id = ?1", [recipe_id])?;
        tx.execute("DELETE FROM recipe_ingredients WHERE recipe_id = ?1", [recipe_id])?;

        insert_recipe_relations(&tx, recipe_id, recipe)?;

        tx.commit()?;

        Ok(())
    }

    fn remove_recipe(&self, recipe_id: RecipeId) -> Result<usize, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        Ok(conn.execute("DELETE FROM recipes WHERE id = ?1", [recipe_id])?)
    }

    fn get_recipe(&self, recipe_id: RecipeId) -> Result<Option<Recipe>, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        Ok(conn
            .query_row(
                &format!("SELECT {RECIPE_COLUMNS} FROM recipes r WHERE r.id = ?1"),
                [recipe_id],
                recipe_from_row,
            )
            .optional()?)
    }

    fn load_recipes(&self, filter: &RecipeFilter, pagination: &Pagination) -> Result<Vec<Recipe>, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let (clause, params) = recipe_filter_clause(filter);

        let mut values = to_values(params);
        values.push(Value::Integer(i64::from(pagination.limit)));
        values.push(Value::Integer(i64::from(pagination.offset)));

        let mut stmt = conn.prepare(&format!(
            "SELECT {RECIPE_COLUMNS} FROM recipes r {clause} ORDER BY r.pub_date DESC, r.id DESC LIMIT ? OFFSET ?"
        ))?;

        let recipes = stmt
            .query_map(params_from_iter(values), recipe_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(recipes)
    }

    fn count_recipes(&self, filter: &RecipeFilter) -> Result<u64, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let (clause, params) = recipe_filter_clause(filter);

        let count: i64 = conn.query_row(
            &format!("SELECT COUNT(*) FROM recipes r {clause}"),
            params_from_iter(to_values(params)),
            |row| row.get(0),
        )?;

        to_count(count)
    }

    fn load_recipe_tags(&self, recipe_id: RecipeId) -> Result<Vec<Tag>, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let mut stmt = conn.prepare(
            "SELECT t.id, t.name, t.color, t.slug FROM tags t JOIN recipe_tags rt ON rt.tag_id = t.id \
             WHERE rt.recipe_id = ?1 ORDER BY t.id",
        )?;

        let tags = stmt.query_map([recipe_id], tag_from_row)?.collect::<Result<Vec<_>, _>>()?;

        Ok(tags)
    }

    fn load_recipe_ingredients(&self, recipe_id: RecipeId) -> Result<Vec<RecipeIngredient>, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let mut stmt = conn.prepare(
            "SELECT i.id, i.name, i.measurement_unit, ri.amount FROM recipe_ingredients ri \
             JOIN ingredients i ON i.id = ri.ingredient_id WHERE ri.recipe_id = ?1 ORDER BY ri.id",
        )?;

        let ingredients = stmt
            .query_map([recipe_id], |row| {
                Ok(RecipeIngredient {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    measurement_unit: row.get(2)?,
                    amount: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ingredients)
    }

    fn add_to_collection(&self, collection: Collection, user_id: UserId, recipe_id: RecipeId) -> Result<usize, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        Ok(conn.execute(
            &format!("INSERT OR IGNORE INTO {} (user_id, recipe_id) VALUES (?1, ?2)", collection.table()),
            [user_id, recipe_id],
        )?)
    }

    fn remove_from_collection(&self, collection: Collection, user_id: UserId, recipe_id: RecipeId) -> Result<usize, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        Ok(conn.execute(
            &format!("DELETE FROM {} WHERE user_id = ?1 AND recipe_id = ?2", collection.table()),
            [user_id, recipe_id],
        )?)
    }

    fn is_in_collection(&self, collection: Collection, user_id: UserId, recipe_id: RecipeId) -> Result<bool, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        Ok(conn.query_row(
            &format!(
                "SELECT EXISTS (SELECT 1 FROM {} WHERE user_id = ?1 AND recipe_id = ?2)",
                collection.table()
            ),
            [user_id, recipe_id],
            |row| row.get(0),
        )?)
    }

    fn count_collection_entries(&self, collection: Collection, recipe_id: RecipeId) -> Result<u64, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let count: i64 = conn.query_row(
            &format!("SELECT COUNT(*) FROM {} WHERE recipe_id = ?1", collection.table()),
            [recipe_id],
            |row| row.get(0),
        )?;

        to_count(count)
    }

    fn load_shopping_list(&self, user_id: UserId) -> Result<Vec<ShoppingListItem>, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let mut stmt = conn.prepare(
            "SELECT i.name, i.measurement_unit, SUM(ri.amount) FROM shopping_cart sc \
             JOIN recipe_ingredients ri ON ri.recipe_id = sc.recipe_id \
             JOIN ingredients i ON i.id = ri.ingredient_id \
             WHERE sc.user_id = ?1 \
             GROUP BY i.id, i.name, i.measurement_unit \
             ORDER BY i.name, i.measurement_unit",
        )?;

        let rows = stmt
            .query_map([user_id], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?, row.get::<_, i64>(2)?))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|(name, measurement_unit, amount)| {
                Ok(ShoppingListItem {
                    name,
                    measurement_unit,
                    amount: to_count(amount)?,
                })
            })
            .collect()
    }
}

impl Sqlite {
    fn find_user(&self, condition: &str, value: &dyn r2d2_sqlite::rusqlite::ToSql) -> Result<Option<User>, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        Ok(conn
            .query_row(
                &format!("SELECT {USER_COLUMNS} FROM users u WHERE {condition}"),
                [value],
                user_from_row,
            )
            .optional()?)
    }
}

fn insert_recipe_relations(conn: &Connection, recipe_id: RecipeId, recipe: &NewRecipe) -> Result<(), Error> {
    for tag_id in &recipe.tags {
        conn.execute(
            "INSERT INTO recipe_tags (recipe_id, tag_id) VALUES (?1, ?2)",
            [recipe_id, *tag_id],
        )?;
    }

    for ingredient in &recipe.ingredients {
        conn.execute(
            "INSERT INTO recipe_ingredients (recipe_id, ingredient_id, amount) VALUES (?1, ?2, ?3)",
            params![recipe_id, ingredient.ingredient_id, ingredient.amount],
        )?;
    }

    Ok(())
}

fn user_from_row(row: &Row<'_>) -> r2d2_sqlite::rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        email: row.get(1)?,
        username: row.get(2)?,
        first_name: row.get(3)?,
        last_name: row.get(4)?,
        password_hash: row.get(5)?,
    })
}

fn tag_from_row(row: &Row<'_>) -> r2d2_sqlite::rusqlite::Result<Tag> {
    Ok(Tag {
        id: row.get(0)?,
        name: row.get(1)?,
        color: row.get(2)?,
        slug: row.get(3)?,
    })
}

fn ingredient_from_row(row: &Row<'_>) -> r2d2_sqlite::rusqlite::Result<Ingredient> {
    Ok(Ingredient {
        id: row.get(0)?,
        name: row.get(1)?,
        measurement_unit: row.get(2)?,
    })
}

fn recipe_from_row(row: &Row<'_>) -> r2d2_sqlite::rusqlite::Result<Recipe> {
    Ok(Recipe {
        id: row.get(0)?,
        author_id: row.get(1)?,
        name: row.get(2)?,
        text: row.get(3)?,
        cooking_time: row.get(4)?,
        image: row.get(5)?,
        pub_date: row.get(6)?,
    })
}

fn to_values(params: Vec<SqlParam>) -> Vec<Value> {
    params
        .into_iter()
        .map(|param| match param {
            SqlParam::Int(value) => Value::Integer(value),
            SqlParam::Text(value) => Value::Text(value),
        })
        .collect()
}

fn to_count(count: i64) -> Result<u64, Error> {
    u64::try_from(count).map_err(|_| Error::invalid_value("count", DRIVER))
}
