/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /api/login.
 *
 * # Authentication Process
 *
 * 1. Look up the user by email (oldest record wins on duplicates)
 * 2. Verify the password using bcrypt
 * 3. Issue a signed session token carrying the user id
 * 4. Return the token and the user record
 *
 * There is no lockout, throttling, or attempt counting.
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::auth::passwords::verify_password;
use crate::auth::users::get_user_by_email;
use crate::error::AppError;
use crate::server::state::AppState;

/// Login handler
///
/// Verifies the email and password and returns a session token on
/// success.
///
/// # Errors
///
/// * `400 Bad Request` - "Usuário não encontrado" when no record matches
///   the email, "Senha inválida" when the password does not match
/// * `500 Internal Server Error` - If the database query, hash check, or
///   token signing fails
/// * `503 Service Unavailable` - If the database is not configured
///
/// # Example Response
///
/// ```json
/// {
///   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
///   "user": {
///     "id": "123e4567-e89b-12d3-a456-426614174000",
///     "email": "ana@example.com",
///     "role": "user",
///     "subscription_active": false
///   }
/// }
/// ```
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let pool = state.db_pool.as_ref().ok_or(AppError::ServiceUnavailable)?;
    tracing::info!("Login request for: {}", request.email);

    let user = get_user_by_email(pool, &request.email)
        .await?
        .ok_or(AppError::UserNotFound)?;

    let valid = verify_password(&request.password, &user.password_hash)?;
    if !valid {
        tracing::warn!("Invalid password for: {}", request.email);
        return Err(AppError::InvalidPassword);
    }

    let token = state.session_keys.issue(user.id)?;

    tracing::info!("User logged in: {} ({})", user.id, user.email);

    Ok(Json(LoginResponse { token, user }))
}
