use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Message returned by list and lookup endpoints on success.
pub const OK_MSG: &str = "ok";

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct ErrorDto {
    pub error: String,
}

/// Confirmation body returned by favorite mutations.
#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct DoneDto {
    pub done: String,
}
