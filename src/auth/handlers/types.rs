/**
 * Authentication Handler Types
 *
 * Request and response types shared by the register and login handlers.
 */

use serde::{Deserialize, Serialize};

use crate::auth::users::User;

/// Registration request
///
/// Role and subscription flag are optional; defaults are applied when
/// the record is constructed.
#[derive(Deserialize, Serialize, Debug)]
pub struct RegisterRequest {
    /// Display name
    pub name: String,
    /// User's email address
    pub email: String,
    /// User's password (hashed before storage)
    pub password: String,
    /// Role label, defaults to "user"
    #[serde(default)]
    pub role: Option<String>,
    /// Subscription flag, defaults to false
    #[serde(default)]
    pub subscription_active: Option<bool>,
}

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// User's email address
    pub email: String,
    /// User's password (verified against the stored hash)
    pub password: String,
}

/// Login response
///
/// Contains the session token and the matched user record.
#[derive(Serialize, Debug)]
pub struct LoginResponse {
    /// Signed session token
    pub token: String,
    /// The authenticated user's record
    pub user: User,
}
