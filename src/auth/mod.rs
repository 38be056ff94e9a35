//! Authentication Module
//!
//! This module handles user records, password hashing, and JWT session
//! tokens, and provides the HTTP handlers for registration and login.
//!
//! # Module Structure
//!
//! ```
//! auth/
//! ├── mod.rs       - Module exports
//! ├── users.rs     - User data model and database operations
//! ├── passwords.rs - Password hashing and verification
//! ├── sessions.rs  - JWT token issuance and validation
//! └── handlers/    - HTTP handlers for auth endpoints
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: client sends profile and password, the password is
//!    hashed and the record is stored.
//! 2. **Login**: credentials are verified against the stored hash and a
//!    signed token is returned.
//! 3. **Protected routes**: the token is presented on each request and
//!    checked by the auth middleware, with no session state on the server.

/// User data model and database operations
pub mod users;

/// Password hashing and verification
pub mod passwords;

/// JWT token issuance and validation
pub mod sessions;

/// HTTP handlers for auth endpoints
pub mod handlers;

// Re-exports for convenience
pub use handlers::{login, register, LoginRequest, LoginResponse, RegisterRequest};
pub use sessions::{Claims, SessionKeys};
pub use users::User;
