//! User domain services.
//!
//! - [`get_profile`]: a user as seen by the viewer.
//! - [`get_author_info`]: an author with the newest recipes, for the
//!   subscriptions pages.
use foodgram_primitives::UserId;

use crate::core::error::Error;
use crate::core::recipes::Recipe;
use crate::core::users::User;
use crate::core::Foodgram;

/// A user and whether the viewer is subscribed to them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub user: User,
    pub is_subscribed: bool,
}

/// An author with some of their recipes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorInfo {
    pub profile: Profile,
    /// The newest recipes, at most the requested limit.
    pub recipes: Vec<Recipe>,
    /// The total number of recipes of the author.
    pub recipes_count: u64,
}

/// # Errors
///
/// Will return `Error::NotFound` if the user does not exist.
pub fn get_profile(foodgram: &Foodgram, viewer: Option<&User>, user_id: UserId) -> Result<Profile, Error> {
    let user = foodgram.get_user(user_id)?;

    profile_of(foodgram, viewer, user)
}

/// # Errors
///
/// Will return `Err` if the database query fails.
pub fn profile_of(foodgram: &Foodgram, viewer: Option<&User>, user: User) -> Result<Profile, Error> {
    let is_subscribed = foodgram.is_subscribed(viewer, user.id)?;

    Ok(Profile { user, is_subscribed })
}

/// # Errors
///
/// Will return `Err` if the database query fails.
pub fn get_author_info(
    foodgram: &Foodgram,
    viewer: Option<&User>,
    author: User,
    recipes_limit: Option<u32>,
) -> Result<AuthorInfo, Error> {
    let (recipes, recipes_count) = foodgram.recipes_by_author(author.id, recipes_limit)?;

    Ok(AuthorInfo {
        profile: profile_of(foodgram, viewer, author)?,
        recipes,
        recipes_count,
    })
}
