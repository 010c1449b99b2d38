//! JSON data transfer objects exchanged over the HTTP API.

pub mod api;
pub mod character;
pub mod planet;
pub mod user;
pub mod vehicle;
