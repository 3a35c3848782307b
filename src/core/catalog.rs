//! Tags and ingredients.
//!
//! Both are reference data managed by the administrators. Clients can only
//! read them.
use foodgram_primitives::{IngredientId, TagId};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use tracing::info;

use super::error::Error;
use super::validation::FieldErrors;
use super::Foodgram;

pub const TAG_FIELD_MAX_LENGTH: usize = 200;
pub const INGREDIENT_FIELD_MAX_LENGTH: usize = 200;

lazy_static! {
    static ref COLOR_PATTERN: Regex = Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("it should be a valid regex");
    static ref SLUG_PATTERN: Regex = Regex::new(r"^[-a-zA-Z0-9_]+$").expect("it should be a valid regex");
}

/// A label used to classify recipes, for example "Breakfast".
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: TagId,
    pub name: String,
    /// Hex color code, for example `#E26C2D`.
    pub color: String,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTag {
    pub name: String,
    pub color: String,
    pub slug: String,
}

#[derive(Debug, Clone, Default)]
pub struct TagForm {
    pub name: Option<String>,
    pub color: Option<String>,
    pub slug: Option<String>,
}

/// Something recipes are made of, with the unit it is measured in.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub id: IngredientId,
    pub name: String,
    pub measurement_unit: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIngredient {
    pub name: String,
    pub measurement_unit: String,
}

#[derive(Debug, Clone, Default)]
pub struct IngredientForm {
    pub name: Option<String>,
    pub measurement_unit: Option<String>,
}

impl TagForm {
    fn validate(&self, existing: &[Tag]) -> Result<NewTag, Error> {
        let mut errors = FieldErrors::new();

        let name = errors.required("name", self.name.as_deref());
        let color = errors.required("color", self.color.as_deref());
        let slug = errors.required("slug", self.slug.as_deref());

        if let Some(name) = name {
            errors.max_length("name", name, TAG_FIELD_MAX_LENGTH);
            if existing.iter().any(|tag| tag.name == name) {
                errors.add("name", "A tag with this name already exists.");
            }
        }

        if let Some(color) = color {
            if !COLOR_PATTERN.is_match(color) {
                errors.add("color", "Enter a valid hex color, for example #E26C2D.");
            }
            if existing.iter().any(|tag| tag.color.eq_ignore_ascii_case(color)) {
                errors.add("color", "A tag with this color already exists.");
            }
        }

        if let Some(slug) = slug {
            errors.max_length("slug", slug, TAG_FIELD_MAX_LENGTH);
            if !SLUG_PATTERN.is_match(slug) {
                errors.add(
                    "slug",
                    "Enter a valid slug consisting of letters, numbers, underscores or hyphens.",
                );
            }
            if existing.iter().any(|tag| tag.slug == slug) {
                errors.add("slug", "A tag with this slug already exists.");
            }
        }

        errors.into_result()?;

        match (name, color, slug) {
            (Some(name), Some(color), Some(slug)) => Ok(NewTag {
                name: name.to_string(),
                color: color.to_uppercase(),
                slug: slug.to_string(),
            }),
            _ => Err(FieldErrors::single("non_field_errors", "Invalid data.")),
        }
    }
}

impl IngredientForm {
    fn validate(&self) -> Result<NewIngredient, Error> {
        let mut errors = FieldErrors::new();

        let name = errors.required("name", self.name.as_deref());
        let measurement_unit = errors.required("measurement_unit", self.measurement_unit.as_deref());

        if let Some(name) = name {
            errors.max_length("name", name, INGREDIENT_FIELD_MAX_LENGTH);
        }

        if let Some(measurement_unit) = measurement_unit {
            errors.max_length("measurement_unit", measurement_unit, INGREDIENT_FIELD_MAX_LENGTH);
        }

        errors.into_result()?;

        match (name, measurement_unit) {
            (Some(name), Some(measurement_unit)) => Ok(NewIngredient {
                name: name.to_string(),
                measurement_unit: measurement_unit.to_string(),
            }),
            _ => Err(FieldErrors::single("non_field_errors", "Invalid data.")),
        }
    }
}

impl Foodgram {
    /// # Errors
    ///
    /// Will return `Err` if the database query fails.
    pub fn list_tags(&self) -> Result<Vec<Tag>, Error> {
        Ok(self.database.load_tags()?)
    }

    /// # Errors
    ///
    /// Will return `Error::NotFound` if the tag does not exist.
    pub fn get_tag(&self, tag_id: TagId) -> Result<Tag, Error> {
        self.database.get_tag(tag_id)?.ok_or_else(|| Error::not_found("tag"))
    }

    /// # Errors
    ///
    /// Will return `Error::Validation` if the data is not valid or the name,
    /// color or slug are already used by another tag.
    pub fn create_tag(&self, form: &TagForm) -> Result<Tag, Error> {
        let existing = match (&form.name, &form.color, &form.slug) {
            (Some(name), Some(color), Some(slug)) => self.database.load_conflicting_tags(name.trim(), color.trim(), slug.trim())?,
            _ => Vec::new(),
        };

        let new_tag = form.validate(&existing)?;

        let id = self.database.add_tag(&new_tag)?;

        info!(tag_id = id, slug = %new_tag.slug, "tag created");

        self.get_tag(id)
    }

    /// # Errors
    ///
    /// Will return `Error::NotFound` if the tag does not exist.
    pub fn delete_tag(&self, tag_id: TagId) -> Result<(), Error> {
        if self.database.remove_tag(tag_id)? == 0 {
            return Err(Error::not_found("tag"));
        }

        info!(tag_id, "tag removed");

        Ok(())
    }

    /// It lists the ingredients ordered by name. When a `name` is given only
    /// the ingredients whose name starts with it are returned, ignoring case.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the database query fails.
    pub fn list_ingredients(&self, name: Option<&str>) -> Result<Vec<Ingredient>, Error> {
        match name.map(str::trim).filter(|name| !name.is_empty()) {
            Some(prefix) => Ok(self.database.load_ingredients_by_name_prefix(prefix)?),
            None => Ok(self.database.load_ingredients()?),
        }
    }

    /// # Errors
    ///
    /// Will return `Error::NotFound` if the ingredient does not exist.
    pub fn get_ingredient(&self, ingredient_id: IngredientId) -> Result<Ingredient, Error> {
        self.database
            .get_ingredient(ingredient_id)?
            .ok_or_else(|| Error::not_found("ingredient"))
    }

    /// # Errors
    ///
    /// Will return `Error::Validation` if the data is not valid or the same
    /// ingredient with the same unit already exists.
    pub fn create_ingredient(&self, form: &IngredientForm) -> Result<Ingredient, Error> {
        let new_ingredient = form.validate()?;

        if self
            .database
            .load_ingredients_by_name_prefix(&new_ingredient.name)?
            .iter()
            .any(|i| same_ingredient(i, &new_ingredient))
        {
            return Err(FieldErrors::single(
                "non_field_errors",
                "An ingredient with this name and measurement unit already exists.",
            ));
        }

        let id = self.database.add_ingredient(&new_ingredient)?;

        info!(ingredient_id = id, name = %new_ingredient.name, "ingredient created");

        self.get_ingredient(id)
    }

    /// It loads a batch of ingredients, skipping the ones that already exist.
    /// It returns how many were added.
    ///
    /// Nothing is added if any entry is not valid.
    ///
    /// # Errors
    ///
    /// Will return `Error::Validation` naming the first invalid entry.
    pub fn import_ingredients(&self, forms: &[IngredientForm]) -> Result<usize, Error> {
        let mut batch = Vec::with_capacity(forms.len());

        for (position, form) in forms.iter().enumerate() {
            match form.validate() {
                Ok(new_ingredient) => batch.push(new_ingredient),
                Err(Error::Validation { errors, .. }) => {
                    return Err(FieldErrors::single(&format!("ingredients[{position}]"), errors.to_string()));
                }
                Err(other) => return Err(other),
            }
        }

        let mut known = self.database.load_ingredients()?;
        let mut added = 0;

        for new_ingredient in batch {
            if known.iter().any(|i| same_ingredient(i, &new_ingredient)) {
                continue;
            }

            let id = self.database.add_ingredient(&new_ingredient)?;

            known.push(Ingredient {
                id,
                name: new_ingredient.name,
                measurement_unit: new_ingredient.measurement_unit,
            });
            added += 1;
        }

        info!(added, "ingredients imported");

        Ok(added)
    }

    /// # Errors
    ///
    /// Will return `Error::NotFound` if the ingredient does not exist.
    pub fn delete_ingredient(&self, ingredient_id: IngredientId) -> Result<(), Error> {
        if self.database.remove_ingredient(ingredient_id)? == 0 {
            return Err(Error::not_found("ingredient"));
        }

        info!(ingredient_id, "ingredient removed");

        Ok(())
    }
}

fn same_ingredient(ingredient: &Ingredient, new_ingredient: &NewIngredient) -> bool {
    ingredient.name == new_ingredient.name && ingredient.measurement_unit == new_ingredient.measurement_unit
}
