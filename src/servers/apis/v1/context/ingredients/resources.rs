//! API resources for the [`ingredients`](crate::servers::apis::v1::context::ingredients)
//! API context.
use serde::{Deserialize, Serialize};

use crate::core::catalog;

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct Ingredient {
    pub id: i64,
    pub name: String,
    pub measurement_unit: String,
}

impl From<catalog::Ingredient> for Ingredient {
    fn from(ingredient: catalog::Ingredient) -> Self {
        Ingredient {
            id: ingredient.id,
            name: ingredient.name,
            measurement_unit: ingredient.measurement_unit,
        }
    }
}

/// Query params of the ingredients list.
#[derive(Deserialize, Debug, Default)]
pub struct ListQuery {
    pub name: Option<String>,
}
