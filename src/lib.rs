//! Todoable - Main Library
//!
//! Todoable is a small REST API for managing to-do lists, the items inside
//! them, and the per-user session tokens that guard them. HTTP Basic
//! credentials are exchanged once for an opaque bearer token; every other
//! request presents that token and operates strictly on the caller's own
//! records.
//!
//! # Module Structure
//!
//! - **`auth`** - Credential codec, user model, token exchange, the
//!   `/authenticate` handler
//! - **`middleware`** - The session gate that resolves tokens to users
//! - **`ledger`** - Lists and items: models, owner-scoped queries, handlers
//! - **`routes`** - Route tables and router assembly
//! - **`server`** - Configuration, state, application construction
//! - **`error`** - The request error taxonomy and its JSON rendering
//!
//! # Usage
//!
//! ```rust,no_run
//! use todoable::server::{config, create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = config::load_database().await?;
//! let app = create_app(pool);
//! // Serve `app` with axum
//! # Ok(())
//! # }
//! ```

/// Authentication: credentials, users, sessions
pub mod auth;

/// Request middleware
pub mod middleware;

/// Lists and items
pub mod ledger;

/// Route configuration
pub mod routes;

/// Server setup and configuration
pub mod server;

/// Request error types
pub mod error;

// Re-export commonly used types
pub use error::ApiError;
pub use server::{create_app, AppState};
