//! An error decorator that remembers where it was created.
//!
//! Foodgram wraps low level errors (database drivers, IO, config parsing) in a
//! [`LocatedError`] so the log line points at the call site that produced the
//! failure and not only at the driver internals.
//!
//! ```rust
//! use std::sync::Arc;
//! use foodgram_located_error::{DynError, Located, LocatedError};
//!
//! #[derive(thiserror::Error, Debug)]
//! enum StorageError {
//!     #[error("disk full")]
//!     DiskFull,
//! }
//!
//! let located: LocatedError<StorageError> = Located(StorageError::DiskFull).into();
//! assert!(located.to_string().starts_with("disk full, "));
//!
//! let dynamic: LocatedError<dyn std::error::Error + Send + Sync> =
//!     (Arc::new(StorageError::DiskFull) as DynError).into();
//! assert!(dynamic.to_string().contains("src/lib.rs"));
//! ```
use std::error::Error;
use std::panic::Location;
use std::sync::Arc;

use tracing::debug;

/// A shareable, type erased error.
pub type DynError = Arc<dyn std::error::Error + Send + Sync>;

/// Marks an error to be converted into a [`LocatedError`] at the caller
/// location.
pub struct Located<E>(pub E);

/// A source error plus the location where it was captured.
#[derive(Debug)]
pub struct LocatedError<'a, E>
where
    E: Error + ?Sized + Send + Sync,
{
    source: Arc<E>,
    location: Box<Location<'a>>,
}

impl<'a, E> LocatedError<'a, E>
where
    E: Error + ?Sized + Send + Sync,
{
    /// The place in the code where the error was captured.
    #[must_use]
    pub fn location(&self) -> &Location<'a> {
        &self.location
    }

    /// The wrapped error.
    #[must_use]
    pub fn inner(&self) -> Arc<E> {
        self.source.clone()
    }
}

impl<'a, E> std::fmt::Display for LocatedError<'a, E>
where
    E: Error + ?Sized + Send + Sync,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.source, self.location)
    }
}

impl<'a, E> Error for LocatedError<'a, E>
where
    E: Error + ?Sized + Send + Sync + 'static,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

impl<'a, E> Clone for LocatedError<'a, E>
where
    E: Error + ?Sized + Send + Sync,
{
    fn clone(&self) -> Self {
        LocatedError {
            source: self.source.clone(),
            location: self.location.clone(),
        }
    }
}

impl<'a, E> From<Located<E>> for LocatedError<'a, E>
where
    E: Error + Send + Sync,
{
    #[track_caller]
    fn from(located: Located<E>) -> Self {
        let e = LocatedError {
            source: Arc::new(located.0),
            location: Box::new(*Location::caller()),
        };
        debug!("{e}");
        e
    }
}

impl<'a> From<DynError> for LocatedError<'a, dyn std::error::Error + Send + Sync> {
    #[track_caller]
    fn from(source: DynError) -> Self {
        let e = LocatedError {
            source,
            location: Box::new(*Location::caller()),
        };
        debug!("{e}");
        e
    }
}
