//! Server-side domain models.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Services only ever see these types,
//! never SeaORM rows or JSON shapes.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
pub mod vehicle;
