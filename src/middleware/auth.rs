/**
 * Session Gate Middleware
 *
 * This middleware protects every route except the credential exchange. It
 * decodes the bearer token header, resolves it to a user, and attaches the
 * resolved identity to the request for downstream handlers.
 */

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::auth::credentials::decode_token;
use crate::auth::users::get_user_by_token;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Authenticated user data resolved from the session token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
}

/// Session gate middleware
///
/// This middleware:
/// 1. Reads the Authorization header
/// 2. Decodes the `Token token="..."` payload
/// 3. Resolves the raw token to a user row
/// 4. Attaches the identity to request extensions for handlers
///
/// Returns 401 if the header is missing, undecodable, or resolves to
/// nobody. A token issued to another user works exactly like any valid
/// token; ownership is enforced per-query in the ledger, not here.
pub async fn token_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = decode_token(header)?;

    let user = get_user_by_token(&state.db, &token)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Token resolved to no user");
            ApiError::InvalidToken
        })?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id: user.id,
        email: user.email,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Handlers behind the session gate take this as a parameter to receive
/// the identity the middleware resolved.
#[derive(Clone, Debug)]
pub struct CurrentUser(pub AuthenticatedUser);

impl axum::extract::FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::TokenRequired
            })?;

        Ok(CurrentUser(user))
    }
}
