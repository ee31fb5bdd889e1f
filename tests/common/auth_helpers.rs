//! Authentication test helpers
//!
//! Provides utilities for creating test users, issuing tokens, and
//! building the two Authorization header shapes the API accepts.

use base64::{engine::general_purpose::STANDARD, Engine};
use sqlx::PgPool;
use uuid::Uuid;

use todoable::auth::sessions::issue_token;
use todoable::auth::users::create_user;

/// Test user credentials
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// Create a test user with an issued session token
pub async fn create_test_user(pool: &PgPool, email: &str, password: &str) -> TestUser {
    let digest = bcrypt::hash(password, bcrypt::DEFAULT_COST).expect("Failed to hash password");
    let user = create_user(pool, email, &digest)
        .await
        .expect("Failed to create test user");
    let token = issue_token(pool, user.id)
        .await
        .expect("Failed to issue test token");

    TestUser {
        id: user.id,
        email: user.email,
        password: password.to_string(),
        token,
    }
}

/// Build a Basic Authorization header value
pub fn basic_header(email: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{}:{}", email, password)))
}

/// Build a bearer token Authorization header value
pub fn token_header(token: &str) -> String {
    format!("Token token=\"{}\"", STANDARD.encode(token))
}
