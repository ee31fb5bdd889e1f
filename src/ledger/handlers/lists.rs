/**
 * List Handlers
 *
 * Handlers for the five list endpoints. Every query runs scoped to the
 * identity the session gate resolved; a list owned by somebody else is
 * reported as missing.
 *
 * # Routes
 *
 * - `GET /lists` - all of the caller's lists, items nested
 * - `GET /lists/{list_id}` - one list with items
 * - `POST /lists` - create
 * - `PATCH /lists/{list_id}` - rename
 * - `DELETE /lists/{list_id}` - delete, cascading to items
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::ApiError;
use crate::ledger::handlers::types::{
    CreatedResponse, ListDetail, ListEnvelope, ListParams, ListRenamedResponse, ListSummary,
    ListsResponse,
};
use crate::ledger::{items, lists};
use crate::middleware::auth::CurrentUser;

/// Pull a usable name out of the request body
///
/// A missing key and a blank value are distinct failures with distinct
/// messages, matching what clients already handle.
fn require_name(params: &ListParams) -> Result<&str, ApiError> {
    match params.name.as_deref() {
        None => Err(ApiError::ListRequired),
        Some(name) if name.trim().is_empty() => Err(ApiError::ListNotCreated),
        Some(name) => Ok(name),
    }
}

/// GET /lists
///
/// Returns every list the caller owns, oldest first, each with its items
/// nested. An empty collection is a 200 with `[]`.
pub async fn index(
    State(pool): State<PgPool>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<ListsResponse>, ApiError> {
    let owned = lists::get_lists(&pool, user.user_id).await?;

    let mut envelopes = Vec::with_capacity(owned.len());
    for list in owned {
        let contents = items::get_items(&pool, list.id).await?;
        envelopes.push(ListEnvelope {
            list: ListDetail::new(list, contents),
        });
    }

    Ok(Json(ListsResponse { lists: envelopes }))
}

/// GET /lists/{list_id}
pub async fn show(
    State(pool): State<PgPool>,
    CurrentUser(user): CurrentUser,
    Path(list_id): Path<Uuid>,
) -> Result<Json<ListEnvelope>, ApiError> {
    let list = lists::get_list(&pool, user.user_id, list_id)
        .await?
        .ok_or_else(ApiError::list_not_found)?;

    let contents = items::get_items(&pool, list.id).await?;

    Ok(Json(ListEnvelope {
        list: ListDetail::new(list, contents),
    }))
}

/// POST /lists
pub async fn create(
    State(pool): State<PgPool>,
    CurrentUser(user): CurrentUser,
    Json(params): Json<ListParams>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let name = require_name(&params)?;

    let list = lists::create_list(&pool, user.user_id, name).await?;
    tracing::info!("List created: {} ({})", list.name, list.id);

    Ok((StatusCode::CREATED, Json(CreatedResponse { id: list.id })))
}

/// PATCH /lists/{list_id}
pub async fn update(
    State(pool): State<PgPool>,
    CurrentUser(user): CurrentUser,
    Path(list_id): Path<Uuid>,
    Json(params): Json<ListParams>,
) -> Result<(StatusCode, Json<ListRenamedResponse>), ApiError> {
    let name = require_name(&params)?;

    let list = lists::rename_list(&pool, user.user_id, list_id, name)
        .await?
        .ok_or_else(ApiError::list_rejected)?;

    Ok((
        StatusCode::CREATED,
        Json(ListRenamedResponse {
            list: ListSummary {
                id: list.id,
                name: list.name,
            },
        }),
    ))
}

/// DELETE /lists/{list_id}
pub async fn destroy(
    State(pool): State<PgPool>,
    CurrentUser(user): CurrentUser,
    Path(list_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let deleted = lists::delete_list(&pool, user.user_id, list_id).await?;

    if !deleted {
        return Err(ApiError::list_rejected());
    }

    tracing::info!("List deleted: {}", list_id);
    Ok(StatusCode::NO_CONTENT)
}
