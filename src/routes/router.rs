/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * the route tables into a single Axum router.
 *
 * # Route Order
 *
 * 1. Public authentication route
 * 2. Token-gated ledger routes
 * 3. Fallback handler (404)
 */

use axum::Router;

use crate::routes::api_routes::{auth_routes, ledger_routes};
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    Router::new()
        .merge(auth_routes())
        .merge(ledger_routes(app_state.clone()))
        .fallback(|| async { "404 Not Found" })
        .with_state(app_state)
}
