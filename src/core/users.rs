//! User accounts, login tokens and subscriptions to authors.
use foodgram_primitives::pagination::Pagination;
use foodgram_primitives::UserId;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use tracing::{debug, info};

use super::auth::{self, Token};
use super::error::Error;
use super::recipes::RecipeFilter;
use super::validation::FieldErrors;
use super::Foodgram;

pub const EMAIL_MAX_LENGTH: usize = 254;
pub const USERNAME_MAX_LENGTH: usize = 150;
pub const NAME_MAX_LENGTH: usize = 150;

/// Usernames that would collide with the fixed routes under `/api/users/`.
const RESERVED_USERNAMES: [&str; 3] = ["me", "subscriptions", "set_password"];

lazy_static! {
    static ref USERNAME_PATTERN: Regex = Regex::new(r"^[\w.@+-]+$").expect("it should be a valid regex");
}

/// A registered user.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip)]
    pub password_hash: String,
}

/// A user ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
}

/// Sign up data as submitted by the client.
#[derive(Debug, Clone, Default)]
pub struct Registration {
    pub email: Option<String>,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password: Option<String>,
}

/// Login data as submitted by the client.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Password change data as submitted by the client.
#[derive(Debug, Clone, Default)]
pub struct PasswordChange {
    pub new_password: Option<String>,
    pub current_password: Option<String>,
}

impl Registration {
    fn validate(&self) -> Result<NewUser, Error> {
        let mut errors = FieldErrors::new();

        let email = errors.required("email", self.email.as_deref());
        let username = errors.required("username", self.username.as_deref());
        let first_name = errors.required("first_name", self.first_name.as_deref());
        let last_name = errors.required("last_name", self.last_name.as_deref());
        let password = errors.required("password", self.password.as_deref());

        if let Some(email) = email {
            errors.max_length("email", email, EMAIL_MAX_LENGTH);
            if !is_valid_email(email) {
                errors.add("email", "Enter a valid email address.");
            }
        }

        if let Some(username) = username {
            errors.max_length("username", username, USERNAME_MAX_LENGTH);
            if !USERNAME_PATTERN.is_match(username) {
                errors.add(
                    "username",
                    "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters.",
                );
            }
            if RESERVED_USERNAMES.contains(&username.to_lowercase().as_str()) {
                errors.add("username", "This username is reserved.");
            }
        }

        if let Some(first_name) = first_name {
            errors.max_length("first_name", first_name, NAME_MAX_LENGTH);
        }

        if let Some(last_name) = last_name {
            errors.max_length("last_name", last_name, NAME_MAX_LENGTH);
        }

        match (email, username, first_name, last_name, password) {
            (Some(email), Some(username), Some(first_name), Some(last_name), Some(password)) if errors.is_empty() => {
                Ok(NewUser {
                    email: normalize_email(email),
                    username: username.to_string(),
                    first_name: first_name.to_string(),
                    last_name: last_name.to_string(),
                    password_hash: auth::hash_password(password),
                })
            }
            _ => {
                errors.into_result()?;
                Err(FieldErrors::single("non_field_errors", "Invalid data."))
            }
        }
    }
}

/// Lowercases the domain part of an email. The local part is kept as
/// submitted, so `John@x.com` and `john@x.com` are different addresses.
fn normalize_email(email: &str) -> String {
    match email.rsplit_once('@') {
        Some((local, domain)) => format!("{local}@{}", domain.to_lowercase()),
        None => email.to_string(),
    }
}

fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

impl Foodgram {
    /// It registers a new user.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the data is not valid or the email or username are
    /// already taken.
    pub fn register_user(&self, registration: &Registration) -> Result<User, Error> {
        let new_user = registration.validate()?;

        let mut errors = FieldErrors::new();

        if self.database.get_user_by_email(&new_user.email)?.is_some() {
            errors.add("email", "A user with that email already exists.");
        }

        if self.database.get_user_by_username(&new_user.username)?.is_some() {
            errors.add("username", "A user with that username already exists.");
        }

        errors.into_result()?;

        let id = self.database.add_user(&new_user)?;

        info!(user_id = id, username = %new_user.username, "user registered");

        self.get_user(id)
    }

    /// # Errors
    ///
    /// Will return `Error::NotFound` if the user does not exist.
    pub fn get_user(&self, user_id: UserId) -> Result<User, Error> {
        self.database.get_user(user_id)?.ok_or_else(|| Error::not_found("user"))
    }

    /// It returns a page of users ordered by id and the total number of users.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the database query fails.
    pub fn list_users(&self, pagination: &Pagination) -> Result<(Vec<User>, u64), Error> {
        let users = self.database.load_users(pagination)?;
        let count = self.database.count_users()?;

        Ok((users, count))
    }

    /// It removes a user with all the recipes, favorites, shopping cart
    /// entries and subscriptions.
    ///
    /// # Errors
    ///
    /// Will return `Error::NotFound` if the user does not exist.
    pub fn delete_user(&self, user_id: UserId) -> Result<(), Error> {
        let user = self.get_user(user_id)?;

        let filter = RecipeFilter {
            author: Some(user.id),
            ..RecipeFilter::default()
        };
        let recipes = self.database.load_recipes(&filter, &Pagination::new(0, u32::MAX))?;

        self.database.remove_user(user.id)?;

        for recipe in recipes {
            self.media.remove(&recipe.image);
        }

        info!(user_id, "user removed");

        Ok(())
    }

    /// # Errors
    ///
    /// Will return `Error::Validation` if the current password does not match.
    pub fn set_password(&self, user: &User, change: &PasswordChange) -> Result<(), Error> {
        let mut errors = FieldErrors::new();

        let new_password = errors.required("new_password", change.new_password.as_deref());
        let current_password = errors.required("current_password", change.current_password.as_deref());

        if let Some(current_password) = current_password {
            if !auth::verify_password(current_password, &user.password_hash) {
                errors.add("current_password", "Invalid current password");
            }
        }

        errors.into_result()?;

        if let Some(new_password) = new_password {
            self.database.update_user_password(user.id, &auth::hash_password(new_password))?;
        }

        debug!(user_id = user.id, "password changed");

        Ok(())
    }

    /// It returns the login token of the user, issuing one if the user does
    /// not have one yet.
    ///
    /// # Errors
    ///
    /// Will return `Error::InvalidCredentials` if the email and password do not
    /// match any user.
    pub fn login(&self, credentials: &Credentials) -> Result<Token, Error> {
        let mut errors = FieldErrors::new();

        let email = errors.required("email", credentials.email.as_deref());
        let password = errors.required("password", credentials.password.as_deref());

        errors.into_result()?;

        let (Some(email), Some(password)) = (email, password) else {
            return Err(Error::InvalidCredentials {
                location: std::panic::Location::caller(),
            });
        };

        let user = self
            .database
            .get_user_by_email(&normalize_email(email))?
            .filter(|user| auth::verify_password(password, &user.password_hash))
            .ok_or(Error::InvalidCredentials {
                location: std::panic::Location::caller(),
            })?;

        if let Some(token) = self.database.get_token_for_user(user.id)? {
            return Ok(token);
        }

        let token = auth::generate();

        self.database.add_token(&token, user.id)?;

        info!(user_id = user.id, "user logged in");

        Ok(token)
    }

    /// It invalidates the login token of the user.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the database query fails.
    pub fn logout(&self, user: &User) -> Result<(), Error> {
        self.database.remove_tokens_for_user(user.id)?;

        info!(user_id = user.id, "user logged out");

        Ok(())
    }

    /// It returns the owner of a login token.
    ///
    /// # Errors
    ///
    /// Will return `Error::InvalidToken` if the token is malformed or unknown.
    pub fn authenticate(&self, token: &str) -> Result<User, Error> {
        let invalid = || Error::InvalidToken {
            location: std::panic::Location::caller(),
        };

        let token = token.parse::<Token>().map_err(|_| invalid())?;

        self.database.get_user_by_token(&token)?.ok_or_else(invalid)
    }

    /// It subscribes the user to the recipes of an author and returns the
    /// author.
    ///
    /// # Errors
    ///
    /// Will return:
    ///
    /// - `Error::NotFound` if the author does not exist.
    /// - `Error::Rejected` if the user is the author or is already subscribed.
    pub fn subscribe(&self, user: &User, author_id: UserId) -> Result<User, Error> {
        let author = self.get_user(author_id)?;

        if author.id == user.id {
            return Err(Error::rejected("You cannot subscribe to yourself."));
        }

        if self.database.is_subscribed(user.id, author.id)? {
            return Err(Error::rejected("You are already subscribed to this author."));
        }

        self.database.add_subscription(user.id, author.id)?;

        debug!(user_id = user.id, author_id = author.id, "subscribed");

        Ok(author)
    }

    /// # Errors
    ///
    /// Will return:
    ///
    /// - `Error::NotFound` if the author does not exist.
    /// - `Error::Rejected` if the user is not subscribed to the author.
    pub fn unsubscribe(&self, user: &User, author_id: UserId) -> Result<(), Error> {
        let author = self.get_user(author_id)?;

        if self.database.remove_subscription(user.id, author.id)? == 0 {
            return Err(Error::rejected("You are not subscribed to this author."));
        }

        debug!(user_id = user.id, author_id = author.id, "unsubscribed");

        Ok(())
    }

    /// Anonymous viewers are not subscribed to anybody.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the database query fails.
    pub fn is_subscribed(&self, viewer: Option<&User>, author_id: UserId) -> Result<bool, Error> {
        match viewer {
            Some(viewer) => Ok(self.database.is_subscribed(viewer.id, author_id)?),
            None => Ok(false),
        }
    }

    /// It returns a page of the authors the user is subscribed to and the
    /// total number of subscriptions.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the database query fails.
    pub fn subscriptions(&self, user: &User, pagination: &Pagination) -> Result<(Vec<User>, u64), Error> {
        let authors = self.database.load_subscribed_authors(user.id, pagination)?;
        let count = self.database.count_subscribed_authors(user.id)?;

        Ok((authors, count))
    }
}
