//! HTTP request handlers.
//!
//! One async handler per endpoint. Handlers extract path parameters, call a service
//! and convert the returned domain model into its DTO. Every failure is an `AppError`,
//! rendered as `{"msg": ...}` by its `IntoResponse` impl.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
pub mod util;
pub mod vehicle;

#[cfg(test)]
mod test;
