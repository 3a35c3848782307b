//! Recipes, and the per user collections of recipes: favorites and the
//! shopping cart.
use std::collections::HashSet;

use chrono::Utc;
use derive_more::Display;
use foodgram_primitives::pagination::Pagination;
use foodgram_primitives::{IngredientId, RecipeId, TagId, UserId};
use serde::Serialize;
use tracing::{debug, info};

use super::catalog::Tag;
use super::error::Error;
use super::media::Image;
use super::users::User;
use super::validation::{FieldErrors, REQUIRED};
use super::Foodgram;

pub const NAME_MAX_LENGTH: usize = 200;
pub const TEXT_MAX_LENGTH: usize = 500;
pub const MIN_COOKING_TIME: i64 = 1;
pub const MIN_AMOUNT: i64 = 1;
/// Largest value a positive integer column holds.
pub const MAX_POSITIVE_INTEGER: i64 = 2_147_483_647;

/// A published recipe.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub id: RecipeId,
    pub author_id: UserId,
    pub name: String,
    pub text: String,
    /// Minutes.
    pub cooking_time: u32,
    /// Image path relative to the media root.
    pub image: String,
    /// Publication time, seconds since the Unix Epoch.
    pub pub_date: i64,
}

/// An ingredient of a recipe with the amount the recipe needs.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RecipeIngredient {
    pub id: IngredientId,
    pub name: String,
    pub measurement_unit: String,
    pub amount: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngredientAmount {
    pub ingredient_id: IngredientId,
    pub amount: u32,
}

/// A recipe ready to be persisted, with its tags and ingredients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecipe {
    pub name: String,
    pub text: String,
    pub cooking_time: u32,
    pub image: String,
    pub tags: Vec<TagId>,
    pub ingredients: Vec<IngredientAmount>,
}

#[derive(Debug, Clone, Default)]
pub struct IngredientAmountForm {
    pub id: Option<i64>,
    pub amount: Option<i64>,
}

/// Recipe data as submitted by the client. On updates the missing fields
/// keep their stored values.
#[derive(Debug, Clone, Default)]
pub struct RecipeForm {
    pub name: Option<String>,
    pub text: Option<String>,
    pub cooking_time: Option<i64>,
    /// A `base64` data URI, or the URL of the current image on updates.
    pub image: Option<String>,
    pub tags: Option<Vec<i64>>,
    pub ingredients: Option<Vec<IngredientAmountForm>>,
}

/// Whether the recipes of a user collection are kept or left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Membership {
    pub user_id: UserId,
    pub included: bool,
}

/// Conditions the listed recipes must meet. Empty fields do not filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeFilter {
    pub author: Option<UserId>,
    /// Recipes with at least one of these tag slugs.
    pub tags: Vec<String>,
    pub favorites: Option<Membership>,
    pub shopping_cart: Option<Membership>,
}

/// The filters a client can ask for when listing recipes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeQuery {
    pub author: Option<UserId>,
    pub tags: Vec<String>,
    pub is_favorited: Option<bool>,
    pub is_in_shopping_cart: Option<bool>,
}

/// The lists of recipes each user keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Collection {
    #[display("favorites")]
    Favorites,
    #[display("shopping cart")]
    ShoppingCart,
}

impl Collection {
    /// The table that stores the collection.
    #[must_use]
    pub fn table(&self) -> &'static str {
        match self {
            Collection::Favorites => "favorites",
            Collection::ShoppingCart => "shopping_cart",
        }
    }
}

enum ImageInput {
    Upload(Image),
    Keep,
}

#[derive(Default)]
struct ValidRecipeForm {
    name: Option<String>,
    text: Option<String>,
    cooking_time: Option<u32>,
    image: Option<ImageInput>,
    tags: Option<Vec<TagId>>,
    ingredients: Option<Vec<IngredientAmount>>,
}

impl Foodgram {
    /// # Errors
    ///
    /// Will return `Error::NotFound` if the recipe does not exist.
    pub fn get_recipe(&self, recipe_id: RecipeId) -> Result<Recipe, Error> {
        self.database.get_recipe(recipe_id)?.ok_or_else(|| Error::not_found("recipe"))
    }

    /// # Errors
    ///
    /// Will return `Err` if the database query fails.
    pub fn recipe_tags(&self, recipe_id: RecipeId) -> Result<Vec<Tag>, Error> {
        Ok(self.database.load_recipe_tags(recipe_id)?)
    }

    /// # Errors
    ///
    /// Will return `Err` if the database query fails.
    pub fn recipe_ingredients(&self, recipe_id: RecipeId) -> Result<Vec<RecipeIngredient>, Error> {
        Ok(self.database.load_recipe_ingredients(recipe_id)?)
    }

    /// It returns a page of recipes, newest first, and the number of recipes
    /// matching the query.
    ///
    /// The favorites and shopping cart conditions refer to the viewer's own
    /// collections. Anonymous viewers have empty collections.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the database query fails.
    pub fn list_recipes(&self, viewer: Option<&User>, query: &RecipeQuery, pagination: &Pagination) -> Result<(Vec<Recipe>, u64), Error> {
        let mut filter = RecipeFilter {
            author: query.author,
            tags: query.tags.clone(),
            ..RecipeFilter::default()
        };

        match (viewer, query.is_favorited) {
            (Some(viewer), Some(included)) => {
                filter.favorites = Some(Membership {
                    user_id: viewer.id,
                    included,
                });
            }
            (None, Some(true)) => return Ok((vec![], 0)),
            _ => {}
        }

        match (viewer, query.is_in_shopping_cart) {
            (Some(viewer), Some(included)) => {
                filter.shopping_cart = Some(Membership {
                    user_id: viewer.id,
                    included,
                });
            }
            (None, Some(true)) => return Ok((vec![], 0)),
            _ => {}
        }

        let recipes = self.database.load_recipes(&filter, pagination)?;
        let count = self.database.count_recipes(&filter)?;

        Ok((recipes, count))
    }

    /// It returns the newest recipes of an author, at most `limit` of them,
    /// and the total number of recipes of the author.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the database query fails.
    pub fn recipes_by_author(&self, author_id: UserId, limit: Option<u32>) -> Result<(Vec<Recipe>, u64), Error> {
        let filter = RecipeFilter {
            author: Some(author_id),
            ..RecipeFilter::default()
        };

        let recipes = self
            .database
            .load_recipes(&filter, &Pagination::new(0, limit.unwrap_or(u32::MAX)))?;
        let count = self.database.count_recipes(&filter)?;

        Ok((recipes, count))
    }

    /// It publishes a new recipe.
    ///
    /// # Errors
    ///
    /// Will return `Error::Validation` if the data is not valid, or refers to
    /// tags or ingredients that do not exist.
    pub fn create_recipe(&self, author: &User, form: &RecipeForm) -> Result<Recipe, Error> {
        let valid = self.validate_recipe_form(form, None, false)?;

        let ValidRecipeForm {
            name: Some(name),
            text: Some(text),
            cooking_time: Some(cooking_time),
            image: Some(ImageInput::Upload(image)),
            tags: Some(tags),
            ingredients: Some(ingredients),
        } = valid
        else {
            return Err(FieldErrors::single("non_field_errors", "Invalid data."));
        };

        let image = self.media.save_recipe_image(&image)?;

        let new_recipe = NewRecipe {
            name,
            text,
            cooking_time,
            image,
            tags,
            ingredients,
        };

        let recipe_id = match self.database.add_recipe(author.id, &new_recipe, Utc::now().timestamp()) {
            Ok(recipe_id) => recipe_id,
            Err(err) => {
                self.media.remove(&new_recipe.image);
                return Err(err.into());
            }
        };

        info!(recipe_id, author_id = author.id, "recipe published");

        self.get_recipe(recipe_id)
    }

    /// It changes a recipe. Only the fields present in the form are changed.
    /// Tags and ingredients, when present, replace the stored ones.
    ///
    /// # Errors
    ///
    /// Will return:
    ///
    /// - `Error::NotFound` if the recipe does not exist.
    /// - `Error::PermissionDenied` if the user is not the author.
    /// - `Error::Validation` if the data is not valid.
    pub fn update_recipe(&self, user: &User, recipe_id: RecipeId, form: &RecipeForm) -> Result<Recipe, Error> {
        self.change_recipe(user, recipe_id, form, true)
    }

    /// It replaces every field of a recipe. The form must be complete, as
    /// when publishing, but the image may still refer to the current one.
    ///
    /// # Errors
    ///
    /// Same as [`Foodgram::update_recipe`], and `Error::Validation` when a
    /// field is missing.
    pub fn replace_recipe(&self, user: &User, recipe_id: RecipeId, form: &RecipeForm) -> Result<Recipe, Error> {
        self.change_recipe(user, recipe_id, form, false)
    }

    fn change_recipe(&self, user: &User, recipe_id: RecipeId, form: &RecipeForm, partial: bool) -> Result<Recipe, Error> {
        let recipe = self.get_recipe(recipe_id)?;

        ensure_author(user, &recipe)?;

        let valid = self.validate_recipe_form(form, Some(&recipe), partial)?;

        let tags = match valid.tags {
            Some(tags) => tags,
            None => self.database.load_recipe_tags(recipe.id)?.into_iter().map(|tag| tag.id).collect(),
        };

        let ingredients = match valid.ingredients {
            Some(ingredients) => ingredients,
            None => self
                .database
                .load_recipe_ingredients(recipe.id)?
                .into_iter()
                .map(|ingredient| IngredientAmount {
                    ingredient_id: ingredient.id,
                    amount: ingredient.amount,
                })
                .collect(),
        };

        let new_image = match valid.image {
            Some(ImageInput::Upload(image)) => Some(self.media.save_recipe_image(&image)?),
            Some(ImageInput::Keep) | None => None,
        };

        let changed = NewRecipe {
            name: valid.name.unwrap_or_else(|| recipe.name.clone()),
            text: valid.text.unwrap_or_else(|| recipe.text.clone()),
            cooking_time: valid.cooking_time.unwrap_or(recipe.cooking_time),
            image: new_image.clone().unwrap_or_else(|| recipe.image.clone()),
            tags,
            ingredients,
        };

        if let Err(err) = self.database.update_recipe(recipe.id, &changed) {
            if let Some(new_image) = &new_image {
                self.media.remove(new_image);
            }
            return Err(err.into());
        }

        if new_image.is_some() {
            self.media.remove(&recipe.image);
        }

        info!(recipe_id, partial, "recipe updated");

        self.get_recipe(recipe.id)
    }

    /// # Errors
    ///
    /// Will return:
    ///
    /// - `Error::NotFound` if the recipe does not exist.
    /// - `Error::PermissionDenied` if the user is not the author.
    pub fn delete_recipe(&self, user: &User, recipe_id: RecipeId) -> Result<(), Error> {
        let recipe = self.get_recipe(recipe_id)?;

        ensure_author(user, &recipe)?;

        self.database.remove_recipe(recipe.id)?;

        self.media.remove(&recipe.image);

        info!(recipe_id, "recipe removed");

        Ok(())
    }

    /// It adds a recipe to one of the user collections. It returns the recipe
    /// and whether it was not there before.
    ///
    /// # Errors
    ///
    /// Will return `Error::NotFound` if the recipe does not exist.
    pub fn add_to_collection(&self, user: &User, collection: Collection, recipe_id: RecipeId) -> Result<(Recipe, bool), Error> {
        let recipe = self.get_recipe(recipe_id)?;

        let added = self.database.add_to_collection(collection, user.id, recipe.id)? > 0;

        debug!(user_id = user.id, recipe_id, %collection, added, "recipe added to collection");

        Ok((recipe, added))
    }

    /// It removes a recipe from one of the user collections. It returns the
    /// recipe and whether it was there.
    ///
    /// # Errors
    ///
    /// Will return `Error::NotFound` if the recipe does not exist.
    pub fn remove_from_collection(
        &self,
        user: &User,
        collection: Collection,
        recipe_id: RecipeId,
    ) -> Result<(Recipe, bool), Error> {
        let recipe = self.get_recipe(recipe_id)?;

        let removed = self.database.remove_from_collection(collection, user.id, recipe.id)? > 0;

        debug!(user_id = user.id, recipe_id, %collection, removed, "recipe removed from collection");

        Ok((recipe, removed))
    }

    /// Anonymous viewers have empty collections.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the database query fails.
    pub fn is_in_collection(&self, viewer: Option<&User>, collection: Collection, recipe_id: RecipeId) -> Result<bool, Error> {
        match viewer {
            Some(viewer) => Ok(self.database.is_in_collection(collection, viewer.id, recipe_id)?),
            None => Ok(false),
        }
    }

    /// How many users keep the recipe in the collection.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the database query fails.
    pub fn collection_count(&self, collection: Collection, recipe_id: RecipeId) -> Result<u64, Error> {
        Ok(self.database.count_collection_entries(collection, recipe_id)?)
    }

    /// Validates the submitted fields. Unless `partial`, every field is
    /// required. The image may refer to the `current` one.
    fn validate_recipe_form(&self, form: &RecipeForm, current: Option<&Recipe>, partial: bool) -> Result<ValidRecipeForm, Error> {
        let required = !partial;
        let mut errors = FieldErrors::new();
        let mut valid = ValidRecipeForm::default();

        if required || form.name.is_some() {
            if let Some(name) = errors.required("name", form.name.as_deref()) {
                errors.max_length("name", name, NAME_MAX_LENGTH);
                valid.name = Some(name.to_string());
            }
        }

        if required || form.text.is_some() {
            if let Some(text) = errors.required("text", form.text.as_deref()) {
                errors.max_length("text", text, TEXT_MAX_LENGTH);
                valid.text = Some(text.to_string());
            }
        }

        match form.cooking_time {
            Some(cooking_time) => {
                errors.min_value("cooking_time", cooking_time, MIN_COOKING_TIME);
                errors.max_value("cooking_time", cooking_time, MAX_POSITIVE_INTEGER);
                valid.cooking_time = u32::try_from(cooking_time).ok();
            }
            None if required => errors.add("cooking_time", REQUIRED),
            None => {}
        }

        match form.image.as_deref().map(str::trim) {
            Some("") => errors.add("image", "The submitted file is empty."),
            Some(image) => match current {
                Some(current) if self.media.refers_to(image, &current.image) => valid.image = Some(ImageInput::Keep),
                _ => match Image::from_data_uri(image) {
                    Ok(image) => valid.image = Some(ImageInput::Upload(image)),
                    Err(reason) => errors.add("image", reason.to_string()),
                },
            },
            None if required => errors.add("image", REQUIRED),
            None => {}
        }

        match &form.tags {
            Some(tags) => {
                if let Some(tags) = self.validate_tags(tags, &mut errors)? {
                    valid.tags = Some(tags);
                }
            }
            None if required => errors.add("tags", REQUIRED),
            None => {}
        }

        match &form.ingredients {
            Some(ingredients) => {
                if let Some(ingredients) = self.validate_ingredients(ingredients, &mut errors)? {
                    valid.ingredients = Some(ingredients);
                }
            }
            None if required => errors.add("ingredients", REQUIRED),
            None => {}
        }

        errors.into_result()?;

        Ok(valid)
    }

    fn validate_tags(&self, tags: &[i64], errors: &mut FieldErrors) -> Result<Option<Vec<TagId>>, Error> {
        if tags.is_empty() {
            errors.add("tags", "Add at least one tag.");
            return Ok(None);
        }

        if !all_unique(tags.iter().copied()) {
            errors.add("tags", "Tags must not repeat.");
            return Ok(None);
        }

        let mut missing = false;

        for tag_id in tags {
            if self.database.get_tag(*tag_id)?.is_none() {
                errors.add("tags", format!("Invalid pk \"{tag_id}\" - object does not exist."));
                missing = true;
            }
        }

        Ok((!missing).then(|| tags.to_vec()))
    }

    fn validate_ingredients(
        &self,
        ingredients: &[IngredientAmountForm],
        errors: &mut FieldErrors,
    ) -> Result<Option<Vec<IngredientAmount>>, Error> {
        if ingredients.is_empty() {
            errors.add("ingredients", "Add at least one ingredient.");
            return Ok(None);
        }

        let mut amounts = Vec::with_capacity(ingredients.len());

        for ingredient in ingredients {
            let Some(ingredient_id) = ingredient.id else {
                errors.add("ingredients", "Each ingredient needs an id.");
                continue;
            };

            let Some(amount) = ingredient.amount else {
                errors.add("ingredients", format!("The amount of ingredient {ingredient_id} is required."));
                continue;
            };

            if !(MIN_AMOUNT..=MAX_POSITIVE_INTEGER).contains(&amount) {
                errors.add(
                    "ingredients",
                    format!("The amount of ingredient {ingredient_id} must be at least {MIN_AMOUNT}."),
                );
                continue;
            }

            if self.database.get_ingredient(ingredient_id)?.is_none() {
                errors.add("ingredients", format!("Invalid pk \"{ingredient_id}\" - object does not exist."));
                continue;
            }

            amounts.push(IngredientAmount {
                ingredient_id,
                amount: u32::try_from(amount).unwrap_or(1),
            });
        }

        if amounts.len() != ingredients.len() {
            return Ok(None);
        }

        if !all_unique(amounts.iter().map(|amount| amount.ingredient_id)) {
            errors.add("ingredients", "Ingredients must not repeat.");
            return Ok(None);
        }

        Ok(Some(amounts))
    }
}

fn ensure_author(user: &User, recipe: &Recipe) -> Result<(), Error> {
    if recipe.author_id == user.id {
        Ok(())
    } else {
        Err(Error::permission_denied("only the author can change a recipe"))
    }
}

fn all_unique<T: Eq + std::hash::Hash>(items: impl Iterator<Item = T>) -> bool {
    let mut seen = HashSet::new();
    items.into_iter().all(|item| seen.insert(item))
}
