//! HTTP request handlers.
//!
//! Controllers extract path and body parameters, call into the service layer, and
//! convert domain models to DTOs. Every handler carries a `utoipa::path` annotation;
//! the router collects them into the OpenAPI document that also drives the sitemap.

pub mod catalog;
pub mod extract;
pub mod favorite;
pub mod sitemap;
pub mod user;

#[cfg(test)]
mod test;
