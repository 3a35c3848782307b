pub mod admin;
pub mod auth_token;
pub mod recipes;
pub mod tags;
pub mod users;
