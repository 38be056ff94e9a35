/**
 * Application Error Types
 *
 * This module defines the error taxonomy used across the server.
 * Every error maps to a fixed HTTP status code and a user-facing
 * message; none of them terminate the process.
 *
 * # Error Categories
 *
 * - Authentication errors (missing or invalid bearer token)
 * - Credential errors (unknown user, wrong password)
 * - Infrastructure errors (database, hashing, token signing, Stripe)
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Server-wide error type
///
/// Authentication and credential variants carry the exact messages the
/// platform has always served to clients. Infrastructure variants wrap
/// the underlying library error and surface a generic message.
#[derive(Debug, Error)]
pub enum AppError {
    /// No `Authorization` header was presented on a protected route
    #[error("Sem token")]
    MissingToken,

    /// The presented token is malformed or its signature does not match
    #[error("Token inválido")]
    InvalidToken,

    /// Login attempted with an email that has no matching record
    #[error("Usuário não encontrado")]
    UserNotFound,

    /// Login attempted with a password that does not match the stored hash
    #[error("Senha inválida")]
    InvalidPassword,

    /// Database failure while reading or writing user records
    #[error("Erro no banco de dados")]
    Store(#[from] sqlx::Error),

    /// Password hashing failure (bcrypt internal error)
    #[error("Erro interno")]
    Hash(#[from] bcrypt::BcryptError),

    /// Token signing failure during issuance
    #[error("Erro interno")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Stripe request failure (network error or non-2xx response)
    #[error("Erro no provedor de pagamento")]
    Upstream(#[from] reqwest::Error),

    /// A required backing service was not configured at startup
    #[error("Serviço indisponível")]
    ServiceUnavailable,
}

impl AppError {
    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `MissingToken` - 401 Unauthorized
    /// - `InvalidToken`, `UserNotFound`, `InvalidPassword` - 400 Bad Request
    /// - `Store`, `Hash`, `Token` - 500 Internal Server Error
    /// - `Upstream` - 502 Bad Gateway
    /// - `ServiceUnavailable` - 503 Service Unavailable
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingToken => StatusCode::UNAUTHORIZED,
            Self::InvalidToken | Self::UserNotFound | Self::InvalidPassword => {
                StatusCode::BAD_REQUEST
            }
            Self::Store(_) | Self::Hash(_) | Self::Token(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Get the user-facing error message
    pub fn message(&self) -> String {
        self.to_string()
    }
}
