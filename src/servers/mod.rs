//! Servers. Services that can be started and stopped.
//!
//! The only server is the [`REST API`](crate::servers::apis).
pub mod apis;
pub mod logging;
pub mod signals;
