use axum::{
    extract::{FromRequest, Query, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Reads a request payload from the query string when one is present,
/// otherwise from a JSON body.
///
/// Clients written against the query-parameter form of the API keep working
/// alongside JSON clients.
#[derive(Debug, Clone)]
pub struct QueryOrJson<T>(pub T);

impl<S, T> FromRequest<S> for QueryOrJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if req.uri().query().is_some_and(|query| !query.is_empty()) {
            let Query(value) = Query::<T>::try_from_uri(req.uri())
                .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
            return Ok(Self(value));
        }

        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}
