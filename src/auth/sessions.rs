/**
 * Session Tokens and Credential Exchange
 *
 * This module owns the session token lifecycle: generating opaque tokens
 * and running the exchange flow that turns Basic credentials into one.
 *
 * # Exchange Process
 *
 * 1. Look up the user by (case-folded) email
 * 2. Unknown email: validate the shape, create the user, issue a token
 * 3. Known email: verify the password with bcrypt, rotate the token
 *
 * A failed verification leaves the stored token untouched.
 *
 * # Tokens
 *
 * Tokens are opaque: 64 bytes from the OS RNG, URL-safe base64, stored on
 * the user row. Possession of the token is the whole credential; there is
 * nothing to sign and no expiry is enforced.
 */

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use rand::RngCore;
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::users::{self, User};
use crate::error::ApiError;

/// Raw token length in bytes, before base64 encoding
const TOKEN_BYTES: usize = 64;

/// Result of a successful credential exchange
///
/// `id` is populated only when the exchange provisioned a fresh user.
#[derive(Debug)]
pub struct AuthExchange {
    /// ID of the newly created user, None for returning users
    pub id: Option<Uuid>,
    /// The freshly issued session token
    pub token: String,
}

/// Generate a new opaque session token
///
/// 64 random bytes, URL-safe base64 without padding. Collisions are not a
/// practical concern at this size; every issuance is effectively unique.
pub fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Issue and persist a fresh token for a user
///
/// Overwrites whatever token the user had before.
pub async fn issue_token(pool: &PgPool, user_id: Uuid) -> Result<String, sqlx::Error> {
    let token = generate_token();
    users::set_token(pool, user_id, &token).await?;
    Ok(token)
}

/// Exchange Basic credentials for a session token
///
/// Finds or provisions the user, then rotates their token. See the module
/// docs for the full flow.
///
/// # Errors
///
/// * `InvalidCredentials` - known email, wrong password
/// * `UserNotCreated` - unknown email that fails provisioning validation
pub async fn exchange(
    pool: &PgPool,
    email: &str,
    password: &str,
) -> Result<AuthExchange, ApiError> {
    match users::get_user_by_email(pool, email).await? {
        Some(user) => {
            let valid = bcrypt::verify(password, &user.password_digest)
                .map_err(|e| {
                    tracing::error!("Password verification error: {:?}", e);
                    ApiError::InvalidCredentials
                })?;

            if !valid {
                tracing::warn!("Invalid password for: {}", user.email);
                return Err(ApiError::InvalidCredentials);
            }

            let token = issue_token(pool, user.id).await?;
            tracing::info!("Token rotated for: {}", user.email);

            Ok(AuthExchange { id: None, token })
        }
        None => {
            let user = provision_user(pool, email, password).await?;
            let token = issue_token(pool, user.id).await?;
            tracing::info!("User created: {}", user.email);

            Ok(AuthExchange {
                id: Some(user.id),
                token,
            })
        }
    }
}

/// Create a user from an unseen email/password pair
///
/// Validation mirrors the exchange contract: the email must look like an
/// email and the password must be non-empty.
async fn provision_user(pool: &PgPool, email: &str, password: &str) -> Result<User, ApiError> {
    if !users::is_valid_email(email) || password.is_empty() {
        tracing::warn!("Rejected provisioning for: {}", email);
        return Err(ApiError::UserNotCreated);
    }

    let digest = bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        ApiError::UserNotCreated
    })?;

    users::create_user(pool, email, &digest)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create user: {:?}", e);
            ApiError::UserNotCreated
        })
}
