//! Business logic layer.
//!
//! Services sit between controllers and repositories. They own transaction boundaries
//! and translate repository results into the application's error kinds: an empty
//! listing or missing row becomes `NotFound`, a duplicate favorite `AlreadyExists`,
//! a dangling favorite `ForeignKeyViolation`.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
pub mod vehicle;

#[cfg(test)]
mod test;

/// Message used for every empty listing and missing catalog row.
pub const NOT_FOUND_MSG: &str = "not found";
