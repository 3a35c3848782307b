//! Errors returned by the core [`Foodgram`](crate::core::Foodgram) services.
//!
//! Error | Context | Description
//! ---|---|---
//! `NotFound` | Lookup | The requested user, recipe, tag or ingredient does not exist.
//! `Validation` | Input | One or more fields of the submitted data are not valid.
//! `Rejected` | Action | The action does not make sense in the current state, for example subscribing twice.
//! `InvalidCredentials` | Authentication | The email and password pair does not match any user.
//! `InvalidToken` | Authentication | The supplied token is not registered.
//! `PermissionDenied` | Authorization | The user is not allowed to modify the resource.
//! `Database` | Persistence | The database driver failed.
//! `Media` | Persistence | Uploaded files could not be written.
//! `ShoppingList` | Export | The shopping list document could not be rendered.
use std::panic::Location;

use foodgram_located_error::{Located, LocatedError};

use super::databases;
use super::media;
use super::shopping_list::pdf;
use super::validation::FieldErrors;

#[derive(thiserror::Error, Debug, Clone)]
pub enum Error {
    #[error("The {resource} was not found, {location}")]
    NotFound {
        resource: &'static str,
        location: &'static Location<'static>,
    },

    #[error("Invalid input: {errors}, {location}")]
    Validation {
        errors: FieldErrors,
        location: &'static Location<'static>,
    },

    #[error("{reason}, {location}")]
    Rejected {
        reason: &'static str,
        location: &'static Location<'static>,
    },

    #[error("Unable to log in with provided credentials, {location}")]
    InvalidCredentials { location: &'static Location<'static> },

    #[error("The supplied token is not valid, {location}")]
    InvalidToken { location: &'static Location<'static> },

    #[error("Permission denied: {reason}, {location}")]
    PermissionDenied {
        reason: &'static str,
        location: &'static Location<'static>,
    },

    #[error("Database failure: {source}")]
    Database {
        source: LocatedError<'static, databases::error::Error>,
    },

    #[error("Media storage failure: {source}")]
    Media {
        source: LocatedError<'static, media::Error>,
    },

    #[error("Shopping list export failure: {source}")]
    ShoppingList {
        source: LocatedError<'static, pdf::Error>,
    },
}

impl Error {
    #[track_caller]
    #[must_use]
    pub fn not_found(resource: &'static str) -> Self {
        Self::NotFound {
            resource,
            location: Location::caller(),
        }
    }

    #[track_caller]
    #[must_use]
    pub fn rejected(reason: &'static str) -> Self {
        Self::Rejected {
            reason,
            location: Location::caller(),
        }
    }

    #[track_caller]
    #[must_use]
    pub fn permission_denied(reason: &'static str) -> Self {
        Self::PermissionDenied {
            reason,
            location: Location::caller(),
        }
    }
}

impl From<databases::error::Error> for Error {
    #[track_caller]
    fn from(err: databases::error::Error) -> Self {
        Self::Database {
            source: Located(err).into(),
        }
    }
}

impl From<media::Error> for Error {
    #[track_caller]
    fn from(err: media::Error) -> Self {
        Self::Media {
            source: Located(err).into(),
        }
    }
}

impl From<pdf::Error> for Error {
    #[track_caller]
    fn from(err: pdf::Error) -> Self {
        Self::ShoppingList {
            source: Located(err).into(),
        }
    }
}
