//! Data transfer objects exchanged over the HTTP API.
//!
//! Every JSON body the server reads or writes is declared here. Server-side domain
//! models convert into these at the controller boundary.

pub mod api;
pub mod catalog;
pub mod favorite;
pub mod user;
