//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each factory module has a `Factory` struct for
//! customization and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::create_user(&db).await?;
//!     let character = factory::create_character(&db).await?;
//!     let favorite = factory::create_favorite(&db, user.id, &character).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .email("luke@rebellion.org")
//!     .active(false)
//!     .build()
//!     .await?;
//!
//! let planet = factory::catalog::CatalogFactory::new(&db, CatalogKind::Planet)
//!     .name("Tatooine")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `catalog` - Create character, vehicle or planet entities
//! - `favorite` - Create favorite rows linking a user to a catalog entity
//! - `helpers` - Unique id generation shared by all factories

pub mod catalog;
pub mod favorite;
pub mod helpers;
pub mod user;

pub use catalog::{create_character, create_planet, create_vehicle};
pub use favorite::create_favorite;
pub use user::create_user;
