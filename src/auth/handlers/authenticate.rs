/**
 * Authenticate Handler
 *
 * This module implements the credential exchange handler for
 * POST /authenticate, the only route outside the session gate.
 *
 * # Exchange Process
 *
 * 1. Decode the Basic Authorization header
 * 2. Find or provision the user
 * 3. Issue a fresh session token
 *
 * # Security
 *
 * - Passwords are verified with bcrypt (constant-time comparison)
 * - A failed exchange never rotates the stored token
 * - The password never appears in logs or responses
 */

use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::Json,
};
use sqlx::PgPool;

use crate::auth::credentials::decode_basic;
use crate::auth::handlers::types::AuthenticateResponse;
use crate::auth::sessions::exchange;
use crate::error::ApiError;

/// Authenticate handler
///
/// Exchanges `Authorization: Basic <base64(email:password)>` for a session
/// token. Unknown emails are provisioned on the fly; known emails must
/// present the right password.
///
/// # Returns
///
/// `201 Created` with `{id?, token}` on success
///
/// # Errors
///
/// * `401` - header missing/malformed, or wrong password
/// * `422` - unknown email that fails provisioning validation
pub async fn authenticate(
    State(pool): State<PgPool>,
    headers: HeaderMap,
) -> Result<(StatusCode, Json<AuthenticateResponse>), ApiError> {
    let header = headers.get(AUTHORIZATION).and_then(|h| h.to_str().ok());
    let (email, password) = decode_basic(header)?;

    tracing::info!("Authenticate request for: {}", email);

    let outcome = exchange(&pool, &email, &password).await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthenticateResponse {
            id: outcome.id,
            token: outcome.token,
        }),
    ))
}
