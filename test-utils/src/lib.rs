//! Holocron Test Utils
//!
//! Provides shared testing utilities for building repository, service and controller tests
//! for the holocron API. This crate offers a builder pattern for creating test contexts with
//! in-memory SQLite databases and factories for seeding catalog rows and favorites.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Row factories with unique defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_favorites() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_catalog_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let user = factory::create_user(db).await?;
//!     let planet = factory::create_planet(db).await?;
//!     factory::create_planet_favorite(db, user.id, planet.id).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
