//! Typed path parameter extractor.

use crate::errors::{ErrorCode, ErrorResponse};
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

/// [`Path`] whose rejection is an [`ErrorResponse`].
///
/// A segment that does not deserialize into `T` is answered with 400
/// `INVALID_PATH`; a route wired without the parameter with 500
/// `INTERNAL_ERROR`.
///
/// ```ignore
/// async fn set_tier_rate(ParsedPath(tier): ParsedPath<ProductTier>) -> ... { }
/// ```
pub struct ParsedPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ParsedPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                let status = rejection.status();
                let code = if status.is_server_error() {
                    tracing::error!(error = %rejection.body_text(), "path extraction failed");
                    ErrorCode::InternalError
                } else {
                    ErrorCode::InvalidPath
                };
                let body = ErrorResponse::new(code, rejection.body_text());
                (status, axum::Json(body)).into_response()
            })?;

        Ok(ParsedPath(value))
    }
}
