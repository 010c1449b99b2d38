use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::server::{error::AppError, service::NOT_FOUND_MSG};

/// Path extractor for numeric IDs.
///
/// Wraps axum's `Path` so a segment that does not parse as the expected type answers
/// like an unmatched route: `404 Not Found` with `{"msg": "not found"}`. The plain-text
/// `400` of the default rejection would collide with `AlreadyExists` on the favorite
/// routes.
///
/// # Example
/// ```ignore
/// pub async fn get_planet_by_id(IdPath(planet_id): IdPath<i32>) { .. }
/// ```
pub struct IdPath<T>(pub T);

impl<S, T> FromRequestParts<S> for IdPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(
                    "Rejected path {}: {}",
                    parts.uri.path(),
                    rejection.body_text()
                );

                Err(AppError::NotFound(NOT_FOUND_MSG.to_string()))
            }
        }
    }
}
