/**
 * Application State Management
 *
 * This module defines the application state structure and implements the
 * `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is the central state container. For this service it holds
 * exactly one thing: the PostgreSQL connection pool. Handlers that only
 * need the pool extract `State<PgPool>` directly via `FromRef`; the
 * session-gate middleware takes the whole `AppState`.
 *
 * The pool is injected at construction — there is no process-global
 * database handle anywhere in the crate.
 */

use axum::extract::FromRef;
use sqlx::PgPool;

/// Application state shared across all request handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,
}

impl AppState {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

/// Allow handlers to extract `State<PgPool>` directly from `AppState`
impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db.clone()
    }
}
