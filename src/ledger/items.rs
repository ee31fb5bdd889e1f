/**
 * Item Model and Database Operations
 *
 * Items are scoped to their list. Callers are expected to have resolved
 * the list through the owner-scoped queries in `ledger::lists` first, so
 * the list id arriving here is already known to belong to the caller.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Item struct representing a to-do entry in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Item {
    /// Unique item ID (UUID)
    pub id: Uuid,
    /// Item name (non-empty)
    pub name: String,
    /// Completion timestamp, None while unfinished
    pub finished_at: Option<DateTime<Utc>>,
    /// Self-referential resource path, set at creation
    pub src: Option<String>,
    /// Owning list
    pub list_id: Uuid,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Create a new item in a list
pub async fn create_item(pool: &PgPool, list_id: Uuid, name: &str) -> Result<Item, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();
    let src = format!("/lists/{}/items/{}", list_id, id);

    let item = sqlx::query_as::<_, Item>(
        r#"
        INSERT INTO items (id, name, src, list_id, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, name, finished_at, src, list_id, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(src)
    .bind(list_id)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(item)
}

/// Get all items in a list, oldest first
pub async fn get_items(pool: &PgPool, list_id: Uuid) -> Result<Vec<Item>, sqlx::Error> {
    let items = sqlx::query_as::<_, Item>(
        r#"
        SELECT id, name, finished_at, src, list_id, created_at, updated_at
        FROM items
        WHERE list_id = $1
        ORDER BY created_at
        "#,
    )
    .bind(list_id)
    .fetch_all(pool)
    .await?;

    Ok(items)
}

/// Toggle an item's completion timestamp
///
/// Unfinished items gain a timestamp, finished ones lose it, in a single
/// atomic UPDATE. Returns the new `finished_at`, or None when the item is
/// absent from the list.
pub async fn toggle_finished(
    pool: &PgPool,
    list_id: Uuid,
    item_id: Uuid,
) -> Result<Option<Option<DateTime<Utc>>>, sqlx::Error> {
    let now = Utc::now();

    let row = sqlx::query_as::<_, (Option<DateTime<Utc>>,)>(
        r#"
        UPDATE items
        SET finished_at = CASE WHEN finished_at IS NULL THEN $1 ELSE NULL END,
            updated_at = $1
        WHERE id = $2 AND list_id = $3
        RETURNING finished_at
        "#,
    )
    .bind(now)
    .bind(item_id)
    .bind(list_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|(finished_at,)| finished_at))
}

/// Delete an item, scoped to its list
///
/// Returns false when the item is absent or belongs to another list.
pub async fn delete_item(
    pool: &PgPool,
    list_id: Uuid,
    item_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM items WHERE id = $1 AND list_id = $2")
        .bind(item_id)
        .bind(list_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
