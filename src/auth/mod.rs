//! Authentication Module
//!
//! This module handles user identity, credential exchange, and session
//! tokens.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports
//! ├── credentials.rs  - Authorization header codec (pure)
//! ├── users.rs        - User model and database operations
//! ├── sessions.rs     - Token generation and credential exchange
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Response types
//!     └── authenticate.rs - POST /authenticate
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Exchange**: client sends `Basic <base64(email:password)>` to
//!    `POST /authenticate`; an unseen email provisions a new user, a known
//!    one must verify; either way a fresh opaque token is issued and the
//!    old one stops working.
//! 2. **Session**: every other route requires
//!    `Token token="<base64(raw_token)>"`; the session gate in
//!    `middleware::auth` resolves it back to a user.
//!
//! # Security
//!
//! - Passwords are stored only as bcrypt digests
//! - Tokens are 64 random bytes; possession is the whole credential
//! - Wrong-password exchanges never disturb the stored token

/// Authorization header codec
pub mod credentials;

/// User data model and database operations
pub mod users;

/// Session token generation and credential exchange
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::AuthenticateResponse;
pub use handlers::authenticate;
pub use users::User;
