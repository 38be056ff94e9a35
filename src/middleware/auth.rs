/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require
 * user authentication. It verifies the session token from the
 * Authorization header and attaches the caller's identity to the
 * request.
 *
 * The header value is handed to the verifier exactly as presented.
 * Clients send the bare token with no "Bearer " scheme prefix, and a
 * prefixed value fails verification like any other malformed token.
 */

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::error::AppError;
use crate::server::state::AppState;

/// Authenticated user data extracted from the session token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// Authentication middleware
///
/// This middleware:
/// 1. Reads the raw `Authorization` header value
/// 2. Verifies it as a session token
/// 3. Attaches the decoded identity to request extensions for handlers
///
/// Returns 401 "Sem token" when the header is absent and 400
/// "Token inválido" when verification fails. On success the request
/// continues to the inner handler.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            AppError::MissingToken
        })?;

    let claims = state.session_keys.verify(token).map_err(|e| {
        tracing::warn!("Invalid token: {:?}", e);
        AppError::InvalidToken
    })?;

    // A signed token always carries a UUID subject; anything else was
    // signed by someone who should not have the secret.
    let user_id = Uuid::parse_str(&claims.sub).map_err(|e| {
        tracing::warn!("Invalid user id in token: {:?}", e);
        AppError::InvalidToken
    })?;

    request.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(request).await)
}
