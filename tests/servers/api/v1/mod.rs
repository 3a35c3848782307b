pub mod asserts;
pub mod client;
