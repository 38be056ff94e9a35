/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits Axum uses for state extraction.
 *
 * # Architecture
 *
 * `AppState` is the central state container, holding:
 * - Session token keys (shared secret, immutable after startup)
 * - Optional database connection pool
 * - Optional Stripe billing configuration
 *
 * There is no other shared mutable state; each request runs
 * independently against these handles.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract only the part of
 * the state they use instead of the whole `AppState`.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::auth::sessions::SessionKeys;
use crate::billing::checkout::BillingConfig;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Session token signing and verification keys
    pub session_keys: Arc<SessionKeys>,

    /// Database connection pool
    ///
    /// This is `None` if the database is not configured (e.g., if the
    /// `DATABASE_URL` environment variable is not set). Handlers check
    /// for `None` before using the database.
    pub db_pool: Option<PgPool>,

    /// Stripe billing configuration, `None` when checkout is disabled
    pub billing: Option<BillingConfig>,
}

/// Allow handlers to extract the optional database pool directly
impl FromRef<AppState> for Option<PgPool> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

/// Allow handlers to extract the optional billing configuration directly
impl FromRef<AppState> for Option<BillingConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.billing.clone()
    }
}
