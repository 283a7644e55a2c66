//! SeaORM entities for the favorites catalog.
//!
//! Catalog tables (`character`, `vehicle`, `planet`) share the same shape and are
//! referenced from `favorite` through a `kind` discriminator plus `entity_id`.

pub mod prelude;

pub mod character;
pub mod favorite;
pub mod planet;
pub mod sea_orm_active_enums;
pub mod user;
pub mod vehicle;
