//! Request extractors shared by the handlers.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::server::error::AppError;

/// Single numeric id taken from the route path.
///
/// Rejects non-numeric or out-of-range segments with `AppError::BadRequest`, so the
/// response keeps the `{"error": ...}` shape.
pub struct IdPath(pub i32);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state).await?;

        Ok(Self(id))
    }
}
