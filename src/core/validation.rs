//! Field level validation of the data submitted by clients.
//!
//! Errors are collected per field, so the client gets every problem of a
//! request at once:
//!
//! ```json
//! {
//!   "cooking_time": ["Ensure this value is greater than or equal to 1."],
//!   "name": ["This field is required."]
//! }
//! ```
use std::collections::BTreeMap;
use std::panic::Location;

use serde::Serialize;

use super::error::Error;

pub const REQUIRED: &str = "This field is required.";
pub const BLANK: &str = "This field may not be blank.";

/// Validation messages grouped by field name.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    #[must_use]
    pub fn messages(&self, field: &str) -> &[String] {
        self.0.get(field).map_or(&[], Vec::as_slice)
    }

    /// Checks a mandatory text field and returns its trimmed value when it is
    /// present and not blank.
    pub fn required<'a>(&mut self, field: &str, value: Option<&'a str>) -> Option<&'a str> {
        match value.map(str::trim) {
            None => {
                self.add(field, REQUIRED);
                None
            }
            Some("") => {
                self.add(field, BLANK);
                None
            }
            Some(value) => Some(value),
        }
    }

    pub fn max_length(&mut self, field: &str, value: &str, max: usize) {
        if value.chars().count() > max {
            self.add(field, format!("Ensure this field has no more than {max} characters."));
        }
    }

    pub fn min_value(&mut self, field: &str, value: i64, min: i64) {
        if value < min {
            self.add(field, format!("Ensure this value is greater than or equal to {min}."));
        }
    }

    pub fn max_value(&mut self, field: &str, value: i64, max: i64) {
        if value > max {
            self.add(field, format!("Ensure this value is less than or equal to {max}."));
        }
    }

    /// Turns the collected messages into an [`Error::Validation`].
    ///
    /// # Errors
    ///
    /// Will return `Err` if at least one message was collected.
    #[track_caller]
    pub fn into_result(self) -> Result<(), Error> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(Error::Validation {
                errors: self,
                location: Location::caller(),
            })
        }
    }

    /// Builds the error for a single field.
    #[track_caller]
    #[must_use]
    pub fn single(field: &str, message: impl Into<String>) -> Error {
        let mut errors = Self::new();
        errors.add(field, message);
        Error::Validation {
            errors,
            location: Location::caller(),
        }
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fields = self
            .0
            .iter()
            .map(|(field, messages)| format!("{field}: {}", messages.join(" ")))
            .collect::<Vec<_>>();

        f.write_str(&fields.join("; "))
    }
}
