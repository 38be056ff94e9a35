//! Authentication test helpers
//!
//! Utilities for creating test users and session tokens.

use sqlx::PgPool;
use uuid::Uuid;

use ultra_platform::auth::passwords::hash_password;
use ultra_platform::auth::sessions::SessionKeys;
use ultra_platform::auth::users::create_user;

use crate::common::TEST_JWT_SECRET;

/// Test user credentials
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// Create a test user directly in the database
pub async fn create_test_user(
    pool: &PgPool,
    name: &str,
    email: &str,
    password: &str,
) -> Result<TestUser, Box<dyn std::error::Error>> {
    let password_hash = hash_password(password)?;

    let user = create_user(
        pool,
        name.to_string(),
        email.to_string(),
        password_hash,
        "user".to_string(),
        false,
    )
    .await?;

    let token = generate_test_token(user.id);

    Ok(TestUser {
        id: user.id,
        email: user.email,
        password: password.to_string(),
        token,
    })
}

/// Generate a session token with the test secret
pub fn generate_test_token(user_id: Uuid) -> String {
    SessionKeys::new(TEST_JWT_SECRET)
        .issue(user_id)
        .expect("Failed to generate test token")
}
