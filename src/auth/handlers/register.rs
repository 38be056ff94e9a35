/**
 * Registration Handler
 *
 * This module implements the user registration handler for POST /api/register.
 *
 * # Registration Process
 *
 * 1. Hash the password using bcrypt
 * 2. Apply defaults (role "user", subscription off)
 * 3. Create the user in the database
 * 4. Return the created record
 *
 * # Duplicates
 *
 * No uniqueness check is performed. Registering the same email twice
 * creates two independent records with distinct ids, and login resolves
 * to the oldest one.
 */

use axum::{extract::State, response::Json};
use sqlx::PgPool;

use crate::auth::handlers::types::RegisterRequest;
use crate::auth::passwords::hash_password;
use crate::auth::users::{create_user, User};
use crate::error::AppError;

/// Register handler
///
/// Creates a new user record from the request body, replacing the
/// plaintext password with its bcrypt hash.
///
/// # Errors
///
/// * `500 Internal Server Error` - If hashing or the database write fails
/// * `503 Service Unavailable` - If the database is not configured
///
/// # Example Request
///
/// ```http
/// POST /api/register HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "name": "Ana",
///   "email": "ana@example.com",
///   "password": "senha123"
/// }
/// ```
pub async fn register(
    State(pool): State<Option<PgPool>>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<User>, AppError> {
    let pool = pool.ok_or(AppError::ServiceUnavailable)?;
    tracing::info!("Register request for: {}", request.email);

    let password_hash = hash_password(&request.password)?;

    let role = request.role.unwrap_or_else(|| "user".to_string());
    let subscription_active = request.subscription_active.unwrap_or(false);

    let user = create_user(
        &pool,
        request.name,
        request.email,
        password_hash,
        role,
        subscription_active,
    )
    .await?;

    tracing::info!("User created: {} ({})", user.id, user.email);

    Ok(Json(user))
}
