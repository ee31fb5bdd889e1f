//! Common test utilities and helpers
//!
//! Shared fixtures for the integration tests: the test database and the
//! authentication helpers.

pub mod auth_helpers;
pub mod database;

use axum_test::TestServer;

/// Build a test server over a fresh app wired to the given database
pub fn create_test_server(pool: &sqlx::PgPool) -> TestServer {
    let app = todoable::server::create_app(pool.clone());
    TestServer::new(app).expect("Failed to start test server")
}
