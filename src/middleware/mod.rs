//! Middleware Module
//!
//! Request-processing middleware. Currently holds the bearer-token
//! authentication middleware used by protected page routes.

/// Bearer-token authentication middleware
pub mod auth;

pub use auth::{require_auth, AuthenticatedUser};
