//! Recipe domain services.
//!
//! - [`get_recipe_info`]: all the data about one recipe.
//! - [`get_recipes_info`]: the same data for a page of recipes.
use foodgram_primitives::RecipeId;

use super::user::{self, Profile};
use crate::core::catalog::Tag;
use crate::core::error::Error;
use crate::core::recipes::{Collection, Recipe, RecipeIngredient};
use crate::core::users::User;
use crate::core::Foodgram;

/// A recipe with everything the API shows about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Info {
    pub recipe: Recipe,
    pub author: Profile,
    pub tags: Vec<Tag>,
    pub ingredients: Vec<RecipeIngredient>,
    /// Whether the viewer keeps it in their favorites.
    pub is_favorited: bool,
    /// Whether the viewer keeps it in their shopping cart.
    pub is_in_shopping_cart: bool,
}

/// # Errors
///
/// Will return `Error::NotFound` if the recipe does not exist.
pub fn get_recipe_info(foodgram: &Foodgram, viewer: Option<&User>, recipe_id: RecipeId) -> Result<Info, Error> {
    let recipe = foodgram.get_recipe(recipe_id)?;

    recipe_info(foodgram, viewer, recipe)
}

/// # Errors
///
/// Will return `Err` if the database query fails.
pub fn get_recipes_info(foodgram: &Foodgram, viewer: Option<&User>, recipes: Vec<Recipe>) -> Result<Vec<Info>, Error> {
    recipes
        .into_iter()
        .map(|recipe| recipe_info(foodgram, viewer, recipe))
        .collect()
}

fn recipe_info(foodgram: &Foodgram, viewer: Option<&User>, recipe: Recipe) -> Result<Info, Error> {
    Ok(Info {
        author: user::get_profile(foodgram, viewer, recipe.author_id)?,
        tags: foodgram.recipe_tags(recipe.id)?,
        ingredients: foodgram.recipe_ingredients(recipe.id)?,
        is_favorited: foodgram.is_in_collection(viewer, Collection::Favorites, recipe.id)?,
        is_in_shopping_cart: foodgram.is_in_collection(viewer, Collection::ShoppingCart, recipe.id)?,
        recipe,
    })
}
