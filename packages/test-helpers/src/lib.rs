//! Testing helpers for the Foodgram backend.
pub mod configuration;
pub mod random;
