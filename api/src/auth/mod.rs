use crate::State;
use crate::error::ApiError;
use anyhow::anyhow;
use axum::{
    async_trait,
    extract::{Extension, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};

pub mod route;

/// An authenticated caller.
///
/// Write handlers take this as an argument, so a request with a missing or
/// unknown bearer token is rejected with 403 before the store is touched.
#[derive(Debug, Clone)]
pub struct Principal {
    pub name: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for Principal
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Extract the authorization token.
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::Forbidden)?;

        use axum::RequestPartsExt;
        let Extension(state) = parts
            .extract::<Extension<State>>()
            .await
            .map_err(|err| ApiError::InternalServerError(anyhow!(err)))?;

        state
            .config
            .api_tokens
            .iter()
            .find(|token| token.secret == bearer.token())
            .map(|token| Principal {
                name: token.name.clone(),
            })
            .ok_or(ApiError::Forbidden)
    }
}
