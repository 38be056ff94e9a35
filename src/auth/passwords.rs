/**
 * Password Hashing
 *
 * Thin wrapper around bcrypt. Hashing embeds a random salt, so two
 * hashes of the same password differ; verification reads the salt back
 * out of the stored hash.
 */

use bcrypt::{hash, verify, BcryptError, DEFAULT_COST};

/// Hash a plaintext password for storage
///
/// Fails only on an internal bcrypt error, which callers treat as a
/// server error.
pub fn hash_password(plaintext: &str) -> Result<String, BcryptError> {
    hash(plaintext, DEFAULT_COST)
}

/// Check a plaintext password against a stored hash
///
/// A wrong password is `Ok(false)`, not an error. `Err` means the
/// stored hash could not be parsed.
pub fn verify_password(plaintext: &str, password_hash: &str) -> Result<bool, BcryptError> {
    verify(plaintext, password_hash)
}
