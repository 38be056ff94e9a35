/**
 * Error Conversion
 *
 * This module converts `AppError` values into HTTP responses so that
 * handlers can return them directly with `?`.
 *
 * # Response Format
 *
 * The body is the error message as a bare JSON string, the format the
 * platform's clients already parse:
 *
 * ```json
 * "Senha inválida"
 * ```
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::error::types::AppError;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Client-facing messages hide the underlying cause, so keep the
        // full error in the server log for 5xx-class failures.
        if status == StatusCode::INTERNAL_SERVER_ERROR || status == StatusCode::BAD_GATEWAY {
            tracing::error!("Request failed: {:?}", self);
        }

        (status, Json(self.message())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn test_missing_token_response() {
        let response = AppError::MissingToken.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], br#""Sem token""#);
    }

    #[tokio::test]
    async fn test_invalid_password_response() {
        let response = AppError::InvalidPassword.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let message: String = serde_json::from_slice(&body).unwrap();
        assert_eq!(message, "Senha inválida");
    }
}
