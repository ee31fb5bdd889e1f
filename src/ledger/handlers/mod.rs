//! Ledger Handlers Module
//!
//! HTTP handlers for the list and item endpoints. All of them sit behind
//! the session gate and operate on the caller's own records only.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Handler exports
//! ├── types.rs    - Request and response payloads
//! ├── lists.rs    - List endpoints
//! └── items.rs    - Item endpoints
//! ```

/// Request and response types
pub mod types;

/// List endpoint handlers
pub mod lists;

/// Item endpoint handlers
pub mod items;
