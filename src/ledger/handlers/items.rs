/**
 * Item Handlers
 *
 * Handlers for the three item endpoints. Each one resolves the list
 * through the caller's identity before touching the item, so a foreign
 * list, a missing list, and a missing item each fail the same way the
 * original clients expect.
 *
 * # Routes
 *
 * - `POST /lists/{list_id}/items` - create an item
 * - `PUT /lists/{list_id}/items/{item_id}/finish` - toggle completion
 * - `DELETE /lists/{list_id}/items/{item_id}` - delete an item
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::ApiError;
use crate::ledger::handlers::types::{CreatedResponse, FinishedResponse, ItemParams};
use crate::ledger::{items, lists};
use crate::middleware::auth::CurrentUser;

fn require_name(params: &ItemParams) -> Result<&str, ApiError> {
    match params.name.as_deref() {
        None => Err(ApiError::ItemRequired),
        Some(name) if name.trim().is_empty() => Err(ApiError::ItemNotCreated),
        Some(name) => Ok(name),
    }
}

/// Resolve a list id through the caller's ownership, for mutations
async fn resolve_list(
    pool: &PgPool,
    user_id: Uuid,
    list_id: Uuid,
) -> Result<lists::List, ApiError> {
    lists::get_list(pool, user_id, list_id)
        .await?
        .ok_or_else(ApiError::list_rejected)
}

/// POST /lists/{list_id}/items
pub async fn create(
    State(pool): State<PgPool>,
    CurrentUser(user): CurrentUser,
    Path(list_id): Path<Uuid>,
    Json(params): Json<ItemParams>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let list = resolve_list(&pool, user.user_id, list_id).await?;
    let name = require_name(&params)?;

    let item = items::create_item(&pool, list.id, name).await?;
    tracing::info!("Item created: {} ({})", item.name, item.id);

    Ok((StatusCode::CREATED, Json(CreatedResponse { id: item.id })))
}

/// PUT /lists/{list_id}/items/{item_id}/finish
///
/// Toggles the completion timestamp: unfinished items get stamped with the
/// current time, finished ones revert to unfinished.
pub async fn finish(
    State(pool): State<PgPool>,
    CurrentUser(user): CurrentUser,
    Path((list_id, item_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<FinishedResponse>, ApiError> {
    let list = resolve_list(&pool, user.user_id, list_id).await?;

    let finished_at = items::toggle_finished(&pool, list.id, item_id)
        .await?
        .ok_or_else(ApiError::item_rejected)?;

    Ok(Json(FinishedResponse { finished_at }))
}

/// DELETE /lists/{list_id}/items/{item_id}
pub async fn destroy(
    State(pool): State<PgPool>,
    CurrentUser(user): CurrentUser,
    Path((list_id, item_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, ApiError> {
    let list = resolve_list(&pool, user.user_id, list_id).await?;

    let deleted = items::delete_item(&pool, list.id, item_id).await?;
    if !deleted {
        return Err(ApiError::item_rejected());
    }

    tracing::info!("Item deleted: {}", item_id);
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_name_missing_key() {
        let params = ItemParams { name: None };
        assert!(matches!(require_name(&params), Err(ApiError::ItemRequired)));
    }

    #[test]
    fn test_require_name_blank() {
        let params = ItemParams {
            name: Some(String::new()),
        };
        assert!(matches!(
            require_name(&params),
            Err(ApiError::ItemNotCreated)
        ));
    }

    #[test]
    fn test_require_name_present() {
        let params = ItemParams {
            name: Some("feed the cat".to_string()),
        };
        assert_eq!(require_name(&params).unwrap(), "feed the cat");
    }
}
