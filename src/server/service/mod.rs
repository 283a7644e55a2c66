//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! They implement the existence and duplicate rules, coordinate repository calls, and
//! work with domain models rather than DTOs or entity models.

pub mod catalog;
pub mod favorite;
pub mod user;
