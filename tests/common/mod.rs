//! Common test utilities and helpers
//!
//! Shared utilities for the integration tests: a test-server builder,
//! database fixtures, and auth helpers.

pub mod auth_helpers;
pub mod database;

use axum_test::TestServer;
use ultra_platform::server::config::ServerConfig;
use ultra_platform::server::init::create_app;

/// Signing secret used by every test server and token helper
pub const TEST_JWT_SECRET: &str = "test-secret";

/// Build a server configuration for tests
///
/// Stripe stays unconfigured so no test can reach the real API.
pub fn test_config(database_url: Option<String>) -> ServerConfig {
    ServerConfig {
        jwt_secret: TEST_JWT_SECRET.to_string(),
        database_url,
        stripe: None,
        public_url: "http://localhost:5000".to_string(),
        port: 5000,
    }
}

/// Create an in-process test server
///
/// Pass `None` to run without a database (pages and middleware still
/// work; store-backed endpoints report the store as unavailable).
pub async fn test_server(database_url: Option<String>) -> TestServer {
    let app = create_app(test_config(database_url)).await;
    TestServer::new(app).expect("Failed to create test server")
}
