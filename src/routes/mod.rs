//! Routes Module
//!
//! Router assembly: page routes, API routes, CORS, and the 404
//! fallback.

/// Main router creation
pub mod router;

/// API route registration
pub mod api_routes;

pub use router::create_router;
