//! API Error Module
//!
//! This module defines the error type shared by every handler in the
//! service. Errors carry their HTTP status code and render as an
//! `{"error_message": "..."}` JSON body.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
