/**
 * Server Initialization
 *
 * This module builds the Axum application from a loaded configuration.
 *
 * # Initialization Process
 *
 * 1. Build the session token keys from the configured secret
 * 2. Connect to the database and run migrations (optional)
 * 3. Build the Stripe client (optional)
 * 4. Assemble the router with the resulting state
 */

use std::sync::Arc;

use axum::Router;

use crate::auth::sessions::SessionKeys;
use crate::billing::checkout::BillingConfig;
use crate::routes::router::create_router;
use crate::server::config::{load_database, ServerConfig};
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// Every external handle (token keys, database pool, Stripe client) is
/// constructed here from the passed-in configuration, so the rest of
/// the codebase never touches the environment.
pub async fn create_app(config: ServerConfig) -> Router {
    let session_keys = Arc::new(SessionKeys::new(&config.jwt_secret));

    let db_pool = load_database(&config).await;

    let billing = config
        .stripe
        .map(|stripe| BillingConfig::new(stripe, config.public_url.clone()));

    let app_state = AppState {
        session_keys,
        db_pool,
        billing,
    };

    create_router(app_state)
}
