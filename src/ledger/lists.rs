/**
 * List Model and Database Operations
 *
 * Every operation in this module takes the owning user's id and bakes it
 * into the query. A list that exists but belongs to someone else is
 * indistinguishable from one that does not exist.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// List struct representing a list in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct List {
    /// Unique list ID (UUID)
    pub id: Uuid,
    /// List name (non-empty)
    pub name: String,
    /// Self-referential resource path, set at creation
    pub src: Option<String>,
    /// Owning user
    pub user_id: Uuid,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Create a new list owned by a user
pub async fn create_list(pool: &PgPool, user_id: Uuid, name: &str) -> Result<List, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();
    let src = format!("/lists/{}", id);

    let list = sqlx::query_as::<_, List>(
        r#"
        INSERT INTO lists (id, name, src, user_id, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, name, src, user_id, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(src)
    .bind(user_id)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(list)
}

/// Get all lists owned by a user, oldest first
pub async fn get_lists(pool: &PgPool, user_id: Uuid) -> Result<Vec<List>, sqlx::Error> {
    let lists = sqlx::query_as::<_, List>(
        r#"
        SELECT id, name, src, user_id, created_at, updated_at
        FROM lists
        WHERE user_id = $1
        ORDER BY created_at
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(lists)
}

/// Get one list by id, scoped to its owner
pub async fn get_list(
    pool: &PgPool,
    user_id: Uuid,
    list_id: Uuid,
) -> Result<Option<List>, sqlx::Error> {
    let list = sqlx::query_as::<_, List>(
        r#"
        SELECT id, name, src, user_id, created_at, updated_at
        FROM lists
        WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(list_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(list)
}

/// Rename a list, scoped to its owner
///
/// Returns None when the list is absent or owned by someone else.
pub async fn rename_list(
    pool: &PgPool,
    user_id: Uuid,
    list_id: Uuid,
    name: &str,
) -> Result<Option<List>, sqlx::Error> {
    let now = Utc::now();

    let list = sqlx::query_as::<_, List>(
        r#"
        UPDATE lists
        SET name = $1, updated_at = $2
        WHERE id = $3 AND user_id = $4
        RETURNING id, name, src, user_id, created_at, updated_at
        "#,
    )
    .bind(name)
    .bind(now)
    .bind(list_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(list)
}

/// Delete a list and its items, scoped to its owner
///
/// The item sweep and the list delete run in one transaction. Returns
/// false (and deletes nothing) when the list is absent or foreign.
pub async fn delete_list(
    pool: &PgPool,
    user_id: Uuid,
    list_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        DELETE FROM items
        WHERE list_id IN (SELECT id FROM lists WHERE id = $1 AND user_id = $2)
        "#,
    )
    .bind(list_id)
    .bind(user_id)
    .execute(&mut *tx)
    .await?;

    let result = sqlx::query("DELETE FROM lists WHERE id = $1 AND user_id = $2")
        .bind(list_id)
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(result.rows_affected() > 0)
}
