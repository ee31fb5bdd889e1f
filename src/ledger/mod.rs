//! Ledger Module
//!
//! The application's domain: lists and the to-do items inside them, always
//! scoped through the owning user.
//!
//! # Architecture
//!
//! The ledger is organized into focused submodules:
//!
//! - **`lists`** - List model and owner-scoped database operations
//! - **`items`** - Item model and list-scoped database operations
//! - **`handlers`** - HTTP handlers for the eight ledger endpoints
//!
//! # Ownership Scoping
//!
//! Every list query carries the caller's user id; every item operation
//! resolves its list through that scope first. A record belonging to
//! another user is reported exactly like a record that does not exist —
//! the API never confirms foreign records either way.
//!
//! # Cascades
//!
//! Deleting a list removes its items in the same transaction; deleting a
//! user (see `auth::users::delete_user`) sweeps lists and items. Cascades
//! are explicit queries here, not database triggers or ORM callbacks.

/// List model and database operations
pub mod lists;

/// Item model and database operations
pub mod items;

/// HTTP handlers for ledger endpoints
pub mod handlers;

// Re-export commonly used types
pub use items::Item;
pub use lists::List;
