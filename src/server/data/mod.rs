//! Database repository layer for all domain entities.
//!
//! Repositories use SeaORM entity models internally and return domain models to keep
//! the data layer separate from business logic. All queries, inserts and deletes are
//! performed through these repositories.

pub mod catalog;
pub mod favorite;
pub mod user;

#[cfg(test)]
mod test;
