//! API resources for the [`users`](crate::servers::apis::v1::context::users)
//! API context.
use serde::{Deserialize, Serialize};

use crate::core::services::user::{AuthorInfo, Profile};
use crate::core::users;
use crate::servers::apis::v1::context::recipes::resources::{ImageUrls, RecipeMinified};

/// A user as seen by the client.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct User {
    pub email: String,
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    /// Whether the client is subscribed to the user. Always `false` for
    /// anonymous clients.
    pub is_subscribed: bool,
}

/// A user just registered.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct CreatedUser {
    pub email: String,
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

/// An author with their newest recipes.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct Author {
    #[serde(flatten)]
    pub user: User,
    pub recipes: Vec<RecipeMinified>,
    pub recipes_count: u64,
}

impl From<Profile> for User {
    fn from(profile: Profile) -> Self {
        User {
            email: profile.user.email,
            id: profile.user.id,
            username: profile.user.username,
            first_name: profile.user.first_name,
            last_name: profile.user.last_name,
            is_subscribed: profile.is_subscribed,
        }
    }
}

impl From<users::User> for CreatedUser {
    fn from(user: users::User) -> Self {
        CreatedUser {
            email: user.email,
            id: user.id,
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
        }
    }
}

impl Author {
    #[must_use]
    pub fn new(info: AuthorInfo, images: &ImageUrls) -> Self {
        Author {
            user: User::from(info.profile),
            recipes: info
                .recipes
                .into_iter()
                .map(|recipe| RecipeMinified::new(recipe, images))
                .collect(),
            recipes_count: info.recipes_count,
        }
    }
}
