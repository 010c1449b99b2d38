//! Factory methods for creating test data.
//!
//! Each catalog entity has its own factory module with a `Factory` struct for
//! customization and a `create_*` convenience function for quick default creation.
//! Defaults are unique per call so UNIQUE columns never collide inside a test.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let character = factory::create_character(&db).await?;
//! factory::create_character_favorite(&db, user.id, character.id).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! use test_utils::factory::character::CharacterFactory;
//!
//! let leia = CharacterFactory::new(&db)
//!     .name("Leia Organa")
//!     .gender(Gender::Female)
//!     .build()
//!     .await?;
//! ```

pub mod character;
pub mod favorite;
pub mod helpers;
pub mod planet;
pub mod user;
pub mod vehicle;

pub use character::create_character;
pub use favorite::{create_character_favorite, create_planet_favorite, create_vehicle_favorite};
pub use helpers::create_user_with_favorites;
pub use planet::create_planet;
pub use user::create_user;
pub use vehicle::create_vehicle;
