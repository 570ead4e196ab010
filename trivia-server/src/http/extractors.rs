//! Custom Axum extractors
//!
//! Rejections are turned into `ApiError` so clients always get the JSON
//! error body instead of axum's plain-text defaults.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;

use super::error::ApiError;
use crate::models::{Pagination, ValidationError};

/// Extract an integer id from the path.
///
/// Non-numeric ids are treated like ids that don't exist (404).
pub struct PathId(pub i32);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::no_results("resource"))?;

        raw.parse::<i32>()
            .map(Self)
            .map_err(|_| ApiError::not_found("resource", raw))
    }
}

/// Page number from the `page` query parameter.
///
/// The first `page` wins when it is repeated; anything unparsable means page 1.
pub struct PageQuery(pub Pagination);

impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs): Query<Vec<(String, String)>> = Query::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!("Malformed query string: {}", rejection.body_text());
                ApiError::Validation(ValidationError::InvalidFormat {
                    field: "query",
                    reason: "malformed query string",
                })
            })?;

        let page = pairs
            .iter()
            .find(|(key, _)| key == "page")
            .map(|(_, value)| value.as_str());
        Ok(Self(Pagination::parse(page)))
    }
}

/// JSON body whose decoding failures are 422 responses
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::MalformedBody {
                reason: rejection.body_text(),
            })?;
        Ok(Self(value))
    }
}
