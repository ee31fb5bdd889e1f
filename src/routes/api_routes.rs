/**
 * API Route Configuration
 *
 * This module defines the route tables: the public credential exchange
 * route and the token-gated ledger routes.
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /authenticate` - exchange Basic credentials for a token (public)
 *
 * ## Lists
 * - `GET /lists` - all of the caller's lists
 * - `POST /lists` - create a list
 * - `GET /lists/{list_id}` - one list with items
 * - `PATCH /lists/{list_id}` - rename a list
 * - `DELETE /lists/{list_id}` - delete a list and its items
 *
 * ## Items
 * - `POST /lists/{list_id}/items` - create an item
 * - `PUT /lists/{list_id}/items/{item_id}/finish` - toggle completion
 * - `DELETE /lists/{list_id}/items/{item_id}` - delete an item
 *
 * Every route except `/authenticate` sits behind the session gate.
 */

use axum::{middleware, routing, Router};

use crate::auth::handlers::authenticate;
use crate::ledger::handlers::{items, lists};
use crate::middleware::auth::token_auth;
use crate::server::state::AppState;

/// The public exchange route
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/authenticate", routing::post(authenticate))
}

/// The token-gated ledger routes
///
/// The session gate runs as a layer on this sub-router, so adding a route
/// here cannot accidentally skip authentication.
pub fn ledger_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/lists",
            routing::get(lists::index).post(lists::create),
        )
        .route(
            "/lists/{list_id}",
            routing::get(lists::show)
                .patch(lists::update)
                .delete(lists::destroy),
        )
        .route(
            "/lists/{list_id}/items",
            routing::post(items::create),
        )
        .route(
            "/lists/{list_id}/items/{item_id}/finish",
            routing::put(items::finish),
        )
        .route(
            "/lists/{list_id}/items/{item_id}",
            routing::delete(items::destroy),
        )
        .layer(middleware::from_fn_with_state(state, token_auth))
}
