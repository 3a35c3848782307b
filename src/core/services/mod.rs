//! Foodgram domain services.
//!
//! They assemble the data the API presents from several domain operations:
//!
//! - [Recipe services](crate::core::services::recipe): a recipe with its author, tags, ingredients and the viewer's flags.
//! - [User services](crate::core::services::user): a user profile as seen by the viewer, and authors with their recipes.
pub mod recipe;
pub mod user;


use foodgram_configuration::Configuration;

use crate::core::Foodgram;

/// It returns a new `Foodgram` building its dependencies.
///
/// # Panics
///
/// Will panic if the domain layer cannot be instantiated.
#[must_use]
pub fn foodgram_factory(config: &Configuration) -> Foodgram {
    match Foodgram::new(&config.core) {
        Ok(foodgram) => foodgram,
        Err(error) => {
            panic!("{}", error)
        }
    }
}
