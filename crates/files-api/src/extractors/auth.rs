//! `AuthUser` extractor: resolves the `x-token` header to a request context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use files_core::error::AppError;
use files_service::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Header carrying the session token.
pub const TOKEN_HEADER: &str = "x-token";

/// Authenticated caller, available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(TOKEN_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing x-token header"))?;

        let user_id = state.authenticator.resolve(token).await?;

        Ok(Self(RequestContext::new(user_id)))
    }
}
