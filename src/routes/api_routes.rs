/**
 * API Route Handlers
 *
 * This module registers the JSON API endpoints:
 * - `POST /api/register` - User registration
 * - `POST /api/login` - User login
 * - `POST /api/checkout` - Stripe subscription checkout
 *
 * All three are public. The only protected route is the dashboard
 * page, which is guarded by the auth middleware in the main router.
 */

use axum::Router;

use crate::auth::{login, register};
use crate::billing::checkout;
use crate::server::state::AppState;

/// Configure API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with API routes configured
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/register", axum::routing::post(register))
        .route("/api/login", axum::routing::post(login))
        .route("/api/checkout", axum::routing::post(checkout))
}
