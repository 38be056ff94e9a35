/**
 * Session Tokens
 *
 * This module handles JWT generation and validation for user sessions.
 *
 * Tokens carry only the user id and have no expiry claim: a token stays
 * valid until the signing secret changes. There is no server-side
 * session store and no revocation list.
 */

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
}

/// Signing and verification keys for session tokens
///
/// Built once at startup from the configured secret and shared through
/// the application state. Keeping both key forms here avoids re-deriving
/// them on every request.
pub struct SessionKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl SessionKeys {
    /// Build session keys from the shared secret
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Tokens are issued without an expiry claim and must keep
        // verifying after any amount of time has passed.
        validation.required_spec_claims.clear();
        validation.validate_exp = false;

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Issue a signed token for a user
    ///
    /// # Arguments
    /// * `user_id` - User ID (UUID)
    ///
    /// # Returns
    /// JWT token string
    pub fn issue(&self, user_id: uuid::Uuid) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Claims {
            sub: user_id.to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Verify and decode a token
    ///
    /// Fails when the token cannot be parsed or its signature does not
    /// match the secret. Verification is stateless.
    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let token_data = decode::<Claims>(token, &self.decoding, &self.validation)?;
        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_and_verify_round_trip() {
        let keys = SessionKeys::new("test-secret");
        let user_id = uuid::Uuid::new_v4();

        let token = keys.issue(user_id).unwrap();
        assert!(!token.is_empty());

        let claims = keys.verify(&token).unwrap();
        assert_eq!(claims.sub, user_id.to_string());
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let keys = SessionKeys::new("test-secret");
        let other_keys = SessionKeys::new("another-secret");

        let token = keys.issue(uuid::Uuid::new_v4()).unwrap();
        assert!(other_keys.verify(&token).is_err());
    }

    #[test]
    fn test_verify_rejects_tampered_token() {
        let keys = SessionKeys::new("test-secret");
        let token = keys.issue(uuid::Uuid::new_v4()).unwrap();

        let mut tampered = token.clone();
        tampered.pop();
        tampered.push(if token.ends_with('A') { 'B' } else { 'A' });

        assert!(keys.verify(&tampered).is_err());
    }

    #[test]
    fn test_verify_rejects_garbage() {
        let keys = SessionKeys::new("test-secret");
        assert!(keys.verify("not.a.token").is_err());
        assert!(keys.verify("").is_err());
    }

    #[test]
    fn test_token_without_expiry_verifies() {
        let keys = SessionKeys::new("test-secret");
        let token = keys.issue(uuid::Uuid::new_v4()).unwrap();

        // The payload has a sub claim and nothing else.
        let claims = keys.verify(&token).unwrap();
        assert!(!claims.sub.is_empty());
    }
}
