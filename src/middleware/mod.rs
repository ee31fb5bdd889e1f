//! Middleware Module
//!
//! Request-processing middleware. Currently one concern: the session gate
//! that turns bearer tokens into resolved identities.

pub mod auth;

pub use auth::{token_auth, AuthenticatedUser, CurrentUser};
