//! Authentication Handlers Module
//!
//! HTTP handlers for the authentication surface. The whole surface is one
//! endpoint: `POST /authenticate` exchanges Basic credentials for a
//! session token, creating the user on first sight.

/// Request and response types
pub mod types;

/// Credential exchange handler
pub mod authenticate;

// Re-export commonly used types
pub use types::AuthenticateResponse;

// Re-export handlers
pub use authenticate::authenticate;
