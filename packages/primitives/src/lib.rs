//! Primitive types shared by the Foodgram packages.
//!
//! These are the identifiers of the persisted entities, the supported database
//! drivers and the pagination window used by every list endpoint.
use std::time::Duration;

use derive_more::Display;
use serde::{Deserialize, Serialize};

pub mod pagination;

/// Duration since the Unix Epoch.
pub type DurationSinceUnixEpoch = Duration;

/// Primary key of a user row.
pub type UserId = i64;

/// Primary key of a recipe row.
pub type RecipeId = i64;

/// Primary key of a tag row.
pub type TagId = i64;

/// Primary key of an ingredient row.
pub type IngredientId = i64;

/// The database management system used to persist the data.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy, Hash, Display)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseDriver {
    /// The `SQLite3` database driver.
    #[display("sqlite3")]
    Sqlite3,
    /// The `MySQL` database driver.
    #[display("mysql")]
    MySQL,
}
