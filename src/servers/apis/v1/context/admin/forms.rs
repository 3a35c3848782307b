//! Request bodies of the [`admin`](crate::servers::apis::v1::context::admin)
//! API context.
use serde::Deserialize;

use crate::core::catalog::{IngredientForm, TagForm};

#[derive(Deserialize, Debug, Default)]
pub struct TagBody {
    pub name: Option<String>,
    pub color: Option<String>,
    pub slug: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct IngredientBody {
    pub name: Option<String>,
    pub measurement_unit: Option<String>,
}

impl From<TagBody> for TagForm {
    fn from(body: TagBody) -> Self {
        TagForm {
            name: body.name,
            color: body.color,
            slug: body.slug,
        }
    }
}

impl From<IngredientBody> for IngredientForm {
    fn from(body: IngredientBody) -> Self {
        IngredientForm {
            name: body.name,
            measurement_unit: body.measurement_unit,
        }
    }
}
