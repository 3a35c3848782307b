//! Request bodies of the [`recipes`](crate::servers::apis::v1::context::recipes)
//! API context.
use serde::Deserialize;

use crate::core::recipes::{IngredientAmountForm, RecipeForm, RecipeQuery};
use crate::core::validation::FieldErrors;
use crate::servers::apis::v1::forms::{flag, integer, primary_keys, Integer, INVALID_INTEGER};

/// Body of the requests to publish or change a recipe.
#[derive(Deserialize, Debug, Default)]
pub struct RecipeBody {
    pub name: Option<String>,
    pub text: Option<String>,
    pub cooking_time: Option<Integer>,
    /// A base64 data URI like `data:image/png;base64,iVBORw0KGgo...`.
    pub image: Option<String>,
    pub tags: Option<Vec<Integer>>,
    pub ingredients: Option<Vec<IngredientAmountBody>>,
}

#[derive(Deserialize, Debug, Default)]
pub struct IngredientAmountBody {
    pub id: Option<Integer>,
    pub amount: Option<Integer>,
}

impl RecipeBody {
    /// It checks the types of the numeric fields.
    ///
    /// # Errors
    ///
    /// Will return the field errors if some number is not an integer.
    pub fn into_form(self) -> Result<RecipeForm, FieldErrors> {
        let mut errors = FieldErrors::new();

        let cooking_time = integer(&mut errors, "cooking_time", self.cooking_time.as_ref(), INVALID_INTEGER);
        let tags = primary_keys(&mut errors, "tags", self.tags.as_ref());
        let ingredients = self.ingredients.map(|ingredients| {
            ingredients
                .iter()
                .map(|ingredient| IngredientAmountForm {
                    id: integer(&mut errors, "ingredients", ingredient.id.as_ref(), INVALID_INTEGER),
                    amount: integer(&mut errors, "ingredients", ingredient.amount.as_ref(), INVALID_INTEGER),
                })
                .collect()
        });

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(RecipeForm {
            name: self.name,
            text: self.text,
            cooking_time,
            image: self.image,
            tags,
            ingredients,
        })
    }
}

/// Filters of the recipes list. The `page` and `limit` params are read by
/// the [`pagination`](crate::servers::apis::v1::pagination).
///
/// The `tags` param can be repeated: `?tags=breakfast&tags=dinner`.
#[derive(Deserialize, Debug, Default)]
pub struct ListQuery {
    #[serde(default)]
    pub tags: Vec<String>,
    pub author: Option<String>,
    pub is_favorited: Option<String>,
    pub is_in_shopping_cart: Option<String>,
}

impl From<ListQuery> for RecipeQuery {
    /// Values that can not be parsed are ignored.
    fn from(query: ListQuery) -> Self {
        RecipeQuery {
            author: query.author.and_then(|author| author.trim().parse::<i64>().ok()),
            tags: query.tags.into_iter().filter(|tag| !tag.is_empty()).collect(),
            is_favorited: flag(query.is_favorited.as_deref()),
            is_in_shopping_cart: flag(query.is_in_shopping_cart.as_deref()),
        }
    }
}
