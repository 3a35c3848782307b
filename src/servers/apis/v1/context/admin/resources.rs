//! API resources for the [`admin`](crate::servers::apis::v1::context::admin)
//! API context.
use serde::{Deserialize, Serialize};

/// Usage counters of a recipe.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct Stats {
    pub id: i64,
    pub name: String,
    pub favorites_count: u64,
}

/// Result of an ingredients import.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct Imported {
    pub imported: usize,
}
