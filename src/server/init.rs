/**
 * Server Initialization
 *
 * This module assembles the Axum application from an established database
 * pool: state construction, router assembly, request tracing.
 *
 * # Initialization Process
 *
 * 1. Wrap the pool in `AppState`
 * 2. Build the router (public exchange route + gated ledger routes)
 * 3. Attach the HTTP trace layer
 *
 * Connection establishment and migrations happen before this in
 * `config::load_database`, so tests can hand in a pool of their own.
 */

use axum::Router;
use sqlx::PgPool;
use tower_http::trace::TraceLayer;

use crate::routes::router::create_router;
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// Takes an already-connected pool so the same construction path serves
/// the binary and the test suite.
pub fn create_app(pool: PgPool) -> Router<()> {
    tracing::info!("Initializing todoable server");

    let app_state = AppState::new(pool);

    create_router(app_state).layer(TraceLayer::new_for_http())
}
