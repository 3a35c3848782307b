//! API is organized in resource groups called contexts.
//!
//! Each context is a module that contains the API endpoints related to a
//! specific resource group.
pub mod admin;
pub mod auth_token;
pub mod health_check;
pub mod ingredients;
pub mod recipes;
pub mod tags;
pub mod users;
