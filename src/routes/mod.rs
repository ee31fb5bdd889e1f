//! Routes Module
//!
//! HTTP route configuration and router assembly.

/// Route tables
pub mod api_routes;

/// Router assembly
pub mod router;

pub use router::create_router;
