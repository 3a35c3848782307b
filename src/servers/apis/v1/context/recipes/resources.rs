//! API resources for the [`recipes`](crate::servers::apis::v1::context::recipes)
//! API context.
use serde::{Deserialize, Serialize};

use crate::core::media::Storage;
use crate::core::recipes::{self, RecipeIngredient};
use crate::core::services::recipe::Info;
use crate::servers::apis::v1::context::tags::resources::Tag;
use crate::servers::apis::v1::context::users::resources::User;
use crate::servers::apis::v1::extractors::request_url::RequestUrl;

/// A recipe with all its data.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct Recipe {
    pub id: i64,
    pub tags: Vec<Tag>,
    pub author: User,
    pub ingredients: Vec<IngredientAmount>,
    pub is_favorited: bool,
    pub is_in_shopping_cart: bool,
    pub name: String,
    /// Absolute URL of the image.
    pub image: String,
    pub text: String,
    /// Minutes.
    pub cooking_time: u32,
}

/// An ingredient of a recipe and how much of it the recipe needs.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct IngredientAmount {
    pub id: i64,
    pub name: String,
    pub measurement_unit: String,
    pub amount: u32,
}

/// The short form of a recipe used in the collections and the
/// subscriptions.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct RecipeMinified {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub cooking_time: u32,
}

/// It turns the stored image paths into absolute URLs, using the host the
/// client sent the request to.
pub struct ImageUrls<'a> {
    origin: String,
    media: &'a Storage,
}

impl<'a> ImageUrls<'a> {
    #[must_use]
    pub fn new(url: &RequestUrl, media: &'a Storage) -> Self {
        Self {
            origin: url.origin(),
            media,
        }
    }

    #[must_use]
    pub fn url(&self, image: &str) -> String {
        format!("{}{}", self.origin, self.media.url(image))
    }
}

impl From<RecipeIngredient> for IngredientAmount {
    fn from(ingredient: RecipeIngredient) -> Self {
        IngredientAmount {
            id: ingredient.id,
            name: ingredient.name,
            measurement_unit: ingredient.measurement_unit,
            amount: ingredient.amount,
        }
    }
}

impl Recipe {
    #[must_use]
    pub fn new(info: Info, images: &ImageUrls) -> Self {
        Recipe {
            id: info.recipe.id,
            tags: info.tags.into_iter().map(Tag::from).collect(),
            author: User::from(info.author),
            ingredients: info.ingredients.into_iter().map(IngredientAmount::from).collect(),
            is_favorited: info.is_favorited,
            is_in_shopping_cart: info.is_in_shopping_cart,
            image: images.url(&info.recipe.image),
            name: info.recipe.name,
            text: info.recipe.text,
            cooking_time: info.recipe.cooking_time,
        }
    }
}

impl RecipeMinified {
    #[must_use]
    pub fn new(recipe: recipes::Recipe, images: &ImageUrls) -> Self {
        RecipeMinified {
            id: recipe.id,
            image: images.url(&recipe.image),
            name: recipe.name,
            cooking_time: recipe.cooking_time,
        }
    }
}
