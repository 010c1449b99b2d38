//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! table family in the application. Repositories use SeaORM entity models internally and
//! return domain models to keep database structures out of the service and controller
//! layers.
//!
//! Every repository is generic over `ConnectionTrait` so services can run it either on
//! the pooled connection or inside a transaction they own.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
pub mod vehicle;
