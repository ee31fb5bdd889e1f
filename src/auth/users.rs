/**
 * User Model and Database Operations
 *
 * This module handles user data and database operations. Emails are folded
 * to lowercase before every store and lookup, and passwords only ever touch
 * the database as bcrypt digests.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// User struct representing a user in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// User email address (stored lowercased, unique)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_digest: String,
    /// Current session token, None until first exchange
    pub token: Option<String>,
    /// When the current token was issued
    pub token_created_at: Option<DateTime<Utc>>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Validate email shape
///
/// A loose check: one `@` with a non-empty local part, and a domain that
/// contains an interior dot and no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.len() < 3 {
        return false;
    }

    if email.chars().any(|c| c.is_whitespace()) || domain.contains('@') {
        return false;
    }

    // Domain needs an interior dot
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `email` - User email (folded to lowercase before insert)
/// * `password_digest` - Hashed password
///
/// # Returns
/// Created user or error
pub async fn create_user(
    pool: &PgPool,
    email: &str,
    password_digest: &str,
) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, email, password_digest, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, email, password_digest, token, token_created_at, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(email.to_lowercase())
    .bind(password_digest)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by email (case-insensitive)
pub async fn get_user_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_digest, token, token_created_at, created_at, updated_at
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email.to_lowercase())
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get user by session token
pub async fn get_user_by_token(pool: &PgPool, token: &str) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_digest, token, token_created_at, created_at, updated_at
        FROM users
        WHERE token = $1
        "#,
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Overwrite the user's session token
///
/// Stamps `token_created_at` alongside. The previous token stops resolving
/// the moment this commits.
pub async fn set_token(pool: &PgPool, user_id: Uuid, token: &str) -> Result<User, sqlx::Error> {
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        UPDATE users
        SET token = $1, token_created_at = $2, updated_at = $2
        WHERE id = $3
        RETURNING id, email, password_digest, token, token_created_at, created_at, updated_at
        "#,
    )
    .bind(token)
    .bind(now)
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Delete a user and everything they own
///
/// Cascades through lists and items in one transaction. There is no HTTP
/// route for this; account removal is an operator action.
pub async fn delete_user(pool: &PgPool, user_id: Uuid) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        DELETE FROM items
        WHERE list_id IN (SELECT id FROM lists WHERE user_id = $1)
        "#,
    )
    .bind(user_id)
    .execute(&mut *tx)
    .await?;

    sqlx::query("DELETE FROM lists WHERE user_id = $1")
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

    let result = sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(result.rows_affected() > 0)
}
